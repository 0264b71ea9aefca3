//! Early-access registration
//!
//! The form has one tab per audience. Switching tabs swaps the
//! audience-specific field and the submit button; shared fields are kept.
//! Submissions go through a [`RegistrationSink`], which is where a real
//! backend would attach. The shipped sink stores nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ButtonVariant, CoreResult};

pub const DEFAULT_ACKNOWLEDGEMENT: &str = "Thanks for registering! We will contact you soon.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationTab {
    #[default]
    Manufacturer,
    Supplier,
}

/// Label and hint for the audience-specific input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub focus_classes: &'static str,
}

impl RegistrationTab {
    pub const ALL: [RegistrationTab; 2] = [RegistrationTab::Manufacturer, RegistrationTab::Supplier];

    pub fn label(self) -> &'static str {
        match self {
            RegistrationTab::Manufacturer => "Manufacturer",
            RegistrationTab::Supplier => "Supplier",
        }
    }

    pub fn audience_field(self) -> AudienceField {
        match self {
            RegistrationTab::Manufacturer => AudienceField {
                name: "mro_categories",
                label: "MRO Categories",
                placeholder: "e.g. Hydraulics, Bearings",
                focus_classes: "focus:border-blue-500 focus:ring-blue-500",
            },
            RegistrationTab::Supplier => AudienceField {
                name: "product_lines",
                label: "Product Lines",
                placeholder: "e.g. Electrical, Tools",
                focus_classes: "focus:border-cyan-500 focus:ring-cyan-500",
            },
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            RegistrationTab::Manufacturer => "Join Waitlist",
            RegistrationTab::Supplier => "Apply as Partner",
        }
    }

    pub fn submit_variant(self) -> ButtonVariant {
        match self {
            RegistrationTab::Manufacturer => ButtonVariant::Primary,
            RegistrationTab::Supplier => ButtonVariant::Secondary,
        }
    }

    /// Classes for this tab's selector button given the active tab
    pub fn selector_classes(self, active: RegistrationTab) -> &'static str {
        match (self, self == active) {
            (RegistrationTab::Manufacturer, true) => "bg-blue-600 text-white shadow-lg",
            (RegistrationTab::Supplier, true) => "bg-cyan-600 text-white shadow-lg",
            (_, false) => "text-slate-400 hover:text-white",
        }
    }
}

impl fmt::Display for RegistrationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationTab::Manufacturer => f.write_str("manufacturer"),
            RegistrationTab::Supplier => f.write_str("supplier"),
        }
    }
}

/// Raw form contents. No validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationFormData {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub mro_categories: String,
    pub product_lines: String,
}

impl RegistrationFormData {
    pub fn audience_value(&self, tab: RegistrationTab) -> &str {
        match tab {
            RegistrationTab::Manufacturer => &self.mro_categories,
            RegistrationTab::Supplier => &self.product_lines,
        }
    }

    pub fn set_audience_value(&mut self, tab: RegistrationTab, value: String) {
        match tab {
            RegistrationTab::Manufacturer => self.mro_categories = value,
            RegistrationTab::Supplier => self.product_lines = value,
        }
    }
}

/// Snapshot of a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub tab: RegistrationTab,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    /// MRO categories for manufacturers, product lines for suppliers
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            received_at: Utc::now(),
        }
    }
}

/// Destination for submitted registrations.
///
/// Implementations backed by a real service are expected to validate per
/// audience and report failures through `CoreError::Submission`.
pub trait RegistrationSink {
    fn accept(&self, registration: &Registration) -> CoreResult<Acknowledgement>;
}

/// Acknowledges every registration and keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAcknowledger;

impl RegistrationSink for LocalAcknowledger {
    fn accept(&self, _registration: &Registration) -> CoreResult<Acknowledgement> {
        Ok(Acknowledgement::new(DEFAULT_ACKNOWLEDGEMENT))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    tab: RegistrationTab,
    form: RegistrationFormData,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> RegistrationTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: RegistrationTab) {
        self.tab = tab;
    }

    pub fn form(&self) -> &RegistrationFormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationFormData {
        &mut self.form
    }

    /// Snapshot the form for the active tab
    pub fn registration(&self) -> Registration {
        Registration {
            tab: self.tab,
            company_name: self.form.company_name.clone(),
            contact_name: self.form.contact_name.clone(),
            email: self.form.email.clone(),
            detail: self.form.audience_value(self.tab).to_string(),
        }
    }

    pub fn submit(&self, sink: &impl RegistrationSink) -> CoreResult<Acknowledgement> {
        let registration = self.registration();
        let acknowledgement = sink.accept(&registration)?;
        tracing::info!(tab = %registration.tab, "registration accepted");
        Ok(acknowledgement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<Registration>>,
    }

    impl RegistrationSink for RecordingSink {
        fn accept(&self, registration: &Registration) -> CoreResult<Acknowledgement> {
            self.received.borrow_mut().push(registration.clone());
            Ok(Acknowledgement::new("recorded"))
        }
    }

    struct RejectingSink;

    impl RegistrationSink for RejectingSink {
        fn accept(&self, _registration: &Registration) -> CoreResult<Acknowledgement> {
            Err(CoreError::Submission("service unavailable".to_string()))
        }
    }

    fn filled_state() -> RegistrationState {
        let mut state = RegistrationState::new();
        let form = state.form_mut();
        form.company_name = "Acme Inc.".to_string();
        form.contact_name = "Jane Smith".to_string();
        form.email = "jane@company.com".to_string();
        form.mro_categories = "Hydraulics".to_string();
        form.product_lines = "Electrical".to_string();
        state
    }

    #[test]
    fn test_manufacturer_tab_presentation() {
        let tab = RegistrationTab::Manufacturer;
        assert_eq!(tab.audience_field().label, "MRO Categories");
        assert_eq!(tab.submit_label(), "Join Waitlist");
        assert_eq!(tab.submit_variant(), ButtonVariant::Primary);
    }

    #[test]
    fn test_supplier_tab_presentation() {
        let tab = RegistrationTab::Supplier;
        assert_eq!(tab.audience_field().label, "Product Lines");
        assert_eq!(tab.submit_label(), "Apply as Partner");
        assert_eq!(tab.submit_variant(), ButtonVariant::Secondary);
    }

    #[test]
    fn test_only_active_tab_selector_is_highlighted() {
        for active in RegistrationTab::ALL {
            let highlighted: Vec<_> = RegistrationTab::ALL
                .into_iter()
                .filter(|tab| tab.selector_classes(active).contains("text-white shadow-lg"))
                .collect();
            assert_eq!(highlighted, vec![active]);
        }
    }

    #[test]
    fn test_switching_tabs_keeps_shared_fields() {
        let mut state = filled_state();
        let before = state.form().clone();
        state.select_tab(RegistrationTab::Supplier);
        state.select_tab(RegistrationTab::Manufacturer);
        state.select_tab(RegistrationTab::Supplier);
        assert_eq!(state.form(), &before);
        assert_eq!(state.tab(), RegistrationTab::Supplier);
    }

    #[test]
    fn test_snapshot_uses_active_tab_detail() {
        let mut state = filled_state();
        assert_eq!(state.registration().detail, "Hydraulics");
        state.select_tab(RegistrationTab::Supplier);
        let registration = state.registration();
        assert_eq!(registration.tab, RegistrationTab::Supplier);
        assert_eq!(registration.detail, "Electrical");
        assert_eq!(registration.company_name, "Acme Inc.");
    }

    #[test]
    fn test_set_audience_value_targets_tab_field() {
        let mut form = RegistrationFormData::default();
        form.set_audience_value(RegistrationTab::Supplier, "Tools".to_string());
        assert_eq!(form.product_lines, "Tools");
        assert!(form.mro_categories.is_empty());
    }

    #[test]
    fn test_each_submit_yields_one_acknowledgement() {
        let sink = RecordingSink::default();
        let empty = RegistrationState::new();
        let filled = filled_state();

        assert_eq!(empty.submit(&sink).unwrap().message, "recorded");
        assert_eq!(filled.submit(&sink).unwrap().message, "recorded");
        assert_eq!(sink.received.borrow().len(), 2);
    }

    #[test]
    fn test_local_acknowledger_accepts_anything() {
        let ack = RegistrationState::new().submit(&LocalAcknowledger).unwrap();
        assert_eq!(ack.message, DEFAULT_ACKNOWLEDGEMENT);
    }

    #[test]
    fn test_rejected_submission_surfaces_error() {
        let err = filled_state().submit(&RejectingSink).unwrap_err();
        assert!(matches!(err, CoreError::Submission(_)));
    }

    #[test]
    fn test_tab_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RegistrationTab::Supplier).unwrap(),
            "\"supplier\""
        );
    }
}
