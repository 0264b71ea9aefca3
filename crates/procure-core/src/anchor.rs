//! Section anchors
//!
//! Every major section of the page exposes a stable element id. Navigation
//! controls only ever target these ids.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Problem,
    Solution,
    Manufacturers,
    Suppliers,
    Regional,
    Roadmap,
    Register,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 7] = [
        SectionAnchor::Problem,
        SectionAnchor::Solution,
        SectionAnchor::Manufacturers,
        SectionAnchor::Suppliers,
        SectionAnchor::Regional,
        SectionAnchor::Roadmap,
        SectionAnchor::Register,
    ];

    /// Links shown in the desktop navbar
    pub const DESKTOP_LINKS: [SectionAnchor; 4] = [
        SectionAnchor::Problem,
        SectionAnchor::Solution,
        SectionAnchor::Manufacturers,
        SectionAnchor::Suppliers,
    ];

    /// Links shown in the mobile menu
    pub const MOBILE_LINKS: [SectionAnchor; 5] = [
        SectionAnchor::Problem,
        SectionAnchor::Solution,
        SectionAnchor::Manufacturers,
        SectionAnchor::Suppliers,
        SectionAnchor::Roadmap,
    ];

    /// DOM element id
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Problem => "problem",
            SectionAnchor::Solution => "solution",
            SectionAnchor::Manufacturers => "manufacturers",
            SectionAnchor::Suppliers => "suppliers",
            SectionAnchor::Regional => "regional",
            SectionAnchor::Roadmap => "roadmap",
            SectionAnchor::Register => "register",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            SectionAnchor::Problem => "Problem",
            SectionAnchor::Solution => "Solution",
            SectionAnchor::Manufacturers => "Manufacturers",
            SectionAnchor::Suppliers => "Suppliers",
            SectionAnchor::Regional => "Regional",
            SectionAnchor::Roadmap => "Roadmap",
            SectionAnchor::Register => "Register",
        }
    }
}

impl fmt::Display for SectionAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchor_ids_are_unique() {
        let ids: HashSet<_> = SectionAnchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), SectionAnchor::ALL.len());
    }

    #[test]
    fn test_display_is_element_id() {
        for anchor in SectionAnchor::ALL {
            assert_eq!(anchor.to_string(), anchor.id());
        }
    }

    #[test]
    fn test_label_lowercases_to_id() {
        for anchor in SectionAnchor::ALL {
            assert_eq!(anchor.label().to_lowercase(), anchor.id());
        }
    }

    #[test]
    fn test_mobile_links_extend_desktop_links_with_roadmap() {
        assert_eq!(&SectionAnchor::MOBILE_LINKS[..4], &SectionAnchor::DESKTOP_LINKS[..]);
        assert_eq!(SectionAnchor::MOBILE_LINKS[4], SectionAnchor::Roadmap);
    }
}
