//! Structural resolution for the form layout primitive.
//!
//! Every combination of the configuration enums maps to one [`LayoutPlan`];
//! the match arms below are exhaustive, so adding a variant forces every
//! placement decision to be revisited at compile time.

/// How the field arranges its label and data regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormLayoutKind {
    /// Label column next to a data column.
    Horizontal,
    /// Label row above the data block.
    #[default]
    Vertical,
    /// Single row, control first (checkbox style).
    Flex,
    /// Single row, label first with the control pushed to the far edge
    /// (toggle style).
    FlexReversed,
}

impl FormLayoutKind {
    pub fn is_flex(self) -> bool {
        matches!(self, Self::Flex | Self::FlexReversed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormAlign {
    #[default]
    Left,
    Right,
}

/// Text scale of the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl FormSize {
    /// Point size for the field's text scale. Small and medium share a size
    /// (small uses tighter spacing elsewhere), as do large and xlarge.
    pub fn text_points(self) -> f32 {
        match self {
            Self::Tiny => 12.0,
            Self::Small | Self::Medium => 14.0,
            Self::Large | Self::Xlarge => 16.0,
        }
    }
}

/// Requested internal arrangement of the label wrapper. `Unset` lets the
/// layout kind decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelLayout {
    #[default]
    Unset,
    Horizontal,
    Vertical,
}

/// Input to [`LayoutPlan::resolve`]: the enum configuration plus which slots
/// the caller actually supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormLayoutConfig {
    pub kind: FormLayoutKind,
    pub align: FormAlign,
    pub size: FormSize,
    pub label_layout: LabelLayout,
    pub has_label: bool,
    pub has_before_label: bool,
    pub has_after_label: bool,
    pub has_label_optional: bool,
    pub has_description: bool,
    /// Explicit override; `None` derives the default from `has_label`.
    pub non_box_input: Option<bool>,
    pub hide_message: bool,
    /// Whether the field is wired into a validated form context.
    pub managed: bool,
}

impl FormLayoutConfig {
    /// A borderless control defaults to "non box" exactly when it has no
    /// label; this is derived here rather than stored so it can never
    /// diverge from the label slot.
    pub fn non_box_input(&self) -> bool {
        self.non_box_input.unwrap_or(!self.has_label)
    }

    pub fn has_label_content(&self) -> bool {
        self.has_label || self.has_before_label || self.has_after_label
    }
}

/// Top-level region arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Label column and data column side by side.
    TwoColumn,
    /// Label row stacked above the data block.
    Stacked,
    /// One row holding the label cluster and the child content.
    Row {
        /// Label leads and the content sits at the far edge.
        reversed: bool,
        /// Spread the two clusters to opposite edges.
        space_between: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelVariant {
    /// Label participates in the form context (error tinting).
    Managed,
    /// Plain static label.
    Plain,
}

/// Internal arrangement of the label wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStack {
    /// Label line and optional marker stacked vertically.
    Column,
    /// Label line left, optional marker pushed to the right edge.
    JustifiedRow,
}

/// Where the validation message line renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSlot {
    /// Not rendered at all.
    Hidden,
    /// Inside the row wrapper that also holds the child content.
    FlexWrapper,
    /// Inside the label wrapper.
    LabelWrapper,
    /// Inside the data block, between content and description.
    DataWrapper,
}

/// The resolved structural decisions for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    pub arrangement: Arrangement,
    /// In a row arrangement, render the child content after the label
    /// cluster instead of before it.
    pub children_last: bool,
    /// Render the label wrapper at all.
    pub show_label_row: bool,
    pub label_variant: LabelVariant,
    pub label_stack: LabelStack,
    pub error_slot: ErrorSlot,
    pub text_points: f32,
    /// Gap between the label region and the data region.
    pub region_gap: f32,
    /// Extra vertical padding around borderless child content.
    pub non_box_gap: f32,
    /// Gap above the description block.
    pub description_gap: f32,
    /// Right-align the data column (two-column arrangement only).
    pub data_align_right: bool,
}

impl LayoutPlan {
    /// Maps the configuration to a plan. Total over the enum cross-product:
    /// every `kind`/`align`/`size` combination resolves without fallthrough.
    pub fn resolve(config: &FormLayoutConfig) -> Self {
        use FormLayoutKind as Kind;

        let arrangement = match config.kind {
            Kind::Horizontal => Arrangement::TwoColumn,
            Kind::Vertical => Arrangement::Stacked,
            Kind::Flex => Arrangement::Row {
                reversed: false,
                space_between: config.align == FormAlign::Right,
            },
            Kind::FlexReversed => Arrangement::Row {
                reversed: true,
                space_between: true,
            },
        };

        let children_last = match config.kind {
            Kind::Flex => config.align == FormAlign::Right,
            Kind::FlexReversed => true,
            Kind::Horizontal | Kind::Vertical => false,
        };

        let error_slot = if !config.managed || config.hide_message {
            ErrorSlot::Hidden
        } else {
            match config.kind {
                Kind::FlexReversed => ErrorSlot::FlexWrapper,
                Kind::Flex => ErrorSlot::LabelWrapper,
                Kind::Horizontal | Kind::Vertical => ErrorSlot::DataWrapper,
            }
        };

        let label_stack = match (config.label_layout, config.kind) {
            (LabelLayout::Horizontal, _) => LabelStack::JustifiedRow,
            (LabelLayout::Vertical, _) => LabelStack::Column,
            (LabelLayout::Unset, Kind::Vertical) => LabelStack::JustifiedRow,
            (LabelLayout::Unset, Kind::Horizontal | Kind::Flex | Kind::FlexReversed) => {
                LabelStack::Column
            }
        };

        let region_gap = match config.kind {
            Kind::Horizontal | Kind::Vertical => 8.0,
            Kind::Flex => 12.0,
            Kind::FlexReversed => 24.0,
        };

        let non_box_gap = if config.non_box_input()
            && config.has_label
            && matches!(config.kind, Kind::Vertical | Kind::Horizontal)
        {
            12.0
        } else {
            0.0
        };

        let description_gap = match config.kind {
            Kind::Vertical | Kind::Horizontal => 8.0,
            Kind::Flex | Kind::FlexReversed => 0.0,
        };

        Self {
            arrangement,
            children_last,
            show_label_row: config.has_label_content()
                || config.has_label_optional
                || config.kind == Kind::Horizontal,
            label_variant: if config.managed {
                LabelVariant::Managed
            } else {
                LabelVariant::Plain
            },
            label_stack,
            error_slot,
            text_points: config.size.text_points(),
            region_gap,
            non_box_gap,
            description_gap,
            data_align_right: config.kind == Kind::Horizontal && config.align == FormAlign::Right,
        }
    }
}
