//! Button and section style variants

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-medium transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-900 disabled:opacity-50 disabled:cursor-not-allowed transform active:scale-[0.98]";

const SECTION_BASE: &str = "py-24 lg:py-32 relative overflow-hidden";

/// Container inside every section
pub const SECTION_INNER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-500 text-white shadow-[0_0_20px_rgba(37,99,235,0.4)] border border-blue-500/50 hover:shadow-[0_0_25px_rgba(37,99,235,0.6)]",
            ButtonVariant::Secondary => "bg-cyan-600 hover:bg-cyan-500 text-white shadow-[0_0_20px_rgba(8,145,178,0.3)] border border-cyan-500/50",
            ButtonVariant::Outline => "bg-transparent border border-slate-700 hover:border-slate-500 text-slate-300 hover:text-white hover:bg-slate-800/50",
            ButtonVariant::Ghost => "bg-transparent text-slate-400 hover:text-white hover:bg-white/5",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-4 py-2 text-xs uppercase tracking-wide",
            ButtonSize::Md => "px-6 py-2.5 text-sm",
            ButtonSize::Lg => "px-8 py-3.5 text-base font-semibold",
        }
    }
}

/// Full class list for a button
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    extra: &str,
) -> String {
    let mut classes = vec![BUTTON_BASE, variant.classes(), size.classes()];
    if full_width {
        classes.push("w-full");
    }
    if !extra.trim().is_empty() {
        classes.push(extra.trim());
    }
    classes.join(" ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SectionBackground {
    #[default]
    Dark,
    Gradient,
}

impl SectionBackground {
    pub fn classes(self) -> &'static str {
        match self {
            SectionBackground::Dark => "bg-transparent",
            SectionBackground::Gradient => "bg-gradient-to-b from-[#0f172a] to-[#020617]",
        }
    }
}

/// Full class list for a section wrapper
pub fn section_classes(background: SectionBackground, extra: &str) -> String {
    let mut classes = vec![SECTION_BASE, background.classes()];
    if !extra.trim().is_empty() {
        classes.push(extra.trim());
    }
    classes.join(" ")
}
