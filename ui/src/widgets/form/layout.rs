//! The form layout widget.
//!
//! Built once per frame via the builder, then `show`n with the child content
//! closure. All placement decisions come from [`LayoutPlan::resolve`]; this
//! file only walks the plan.

use bon::Builder;
use egui::{Align, Grid, Layout, Response, RichText, Ui};

use crate::utils::colors::COLOR_RED;

use super::style::{
    Arrangement, ErrorSlot, FormAlign, FormLayoutConfig, FormLayoutKind, FormSize, LabelLayout,
    LabelStack, LabelVariant, LayoutPlan,
};

/// Gap above an in-data validation message.
const ERROR_GAP: f32 = 8.0;

/// Point size of a plain (unmanaged) description paragraph; managed
/// descriptions scale with the field size instead.
const PLAIN_DESCRIPTION_POINTS: f32 = 14.0;

/// A single form field frame: label cluster, child content, validation
/// message, and description, arranged per the layout configuration.
#[derive(Builder)]
pub struct FormLayout<'a> {
    #[builder(default)]
    layout: FormLayoutKind,
    #[builder(default)]
    align: FormAlign,
    #[builder(default)]
    size: FormSize,
    #[builder(default)]
    label_layout: LabelLayout,
    label: Option<&'a str>,
    label_optional: Option<&'a str>,
    before_label: Option<&'a str>,
    after_label: Option<&'a str>,
    description: Option<&'a str>,
    error: Option<&'a str>,
    /// Overrides the derived "borderless control" default (`!label`).
    non_box_input: Option<bool>,
    #[builder(default)]
    hide_message: bool,
    /// Wire label/description/error into the enclosing validated form
    /// instead of rendering them as plain static text.
    #[builder(default)]
    managed: bool,
    id_salt: Option<&'a str>,
}

impl<'a> FormLayout<'a> {
    fn config(&self) -> FormLayoutConfig {
        FormLayoutConfig {
            kind: self.layout,
            align: self.align,
            size: self.size,
            label_layout: self.label_layout,
            has_label: self.label.is_some(),
            has_before_label: self.before_label.is_some(),
            has_after_label: self.after_label.is_some(),
            has_label_optional: self.label_optional.is_some(),
            has_description: self.description.is_some(),
            non_box_input: self.non_box_input,
            hide_message: self.hide_message,
            managed: self.managed,
        }
    }

    /// The structural plan this field will render with.
    pub fn plan(&self) -> LayoutPlan {
        LayoutPlan::resolve(&self.config())
    }

    /// Renders the field around `add_contents` (the actual control).
    pub fn show(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) -> Response {
        let plan = self.plan();
        match plan.arrangement {
            Arrangement::Stacked => self.show_stacked(ui, &plan, add_contents),
            Arrangement::TwoColumn => self.show_two_column(ui, &plan, add_contents),
            Arrangement::Row { space_between, .. } => {
                self.show_row(ui, &plan, space_between, add_contents)
            }
        }
    }

    fn show_stacked(
        &self,
        ui: &mut Ui,
        plan: &LayoutPlan,
        add_contents: impl FnOnce(&mut Ui),
    ) -> Response {
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = plan.region_gap;
            if plan.show_label_row {
                self.label_wrapper(ui, plan);
            }
            self.data_wrapper(ui, plan, add_contents);
        })
        .response
    }

    fn show_two_column(
        &self,
        ui: &mut Ui,
        plan: &LayoutPlan,
        add_contents: impl FnOnce(&mut Ui),
    ) -> Response {
        let salt = (
            "form_layout",
            self.id_salt.unwrap_or_default(),
            self.label.unwrap_or_default(),
        );
        Grid::new(salt)
            .num_columns(2)
            .spacing([plan.region_gap * 2.0, plan.region_gap])
            .min_col_width(120.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    if plan.show_label_row {
                        self.label_wrapper(ui, plan);
                    }
                });
                if plan.data_align_right {
                    ui.with_layout(Layout::top_down(Align::Max), |ui| {
                        self.data_wrapper(ui, plan, add_contents);
                    });
                } else {
                    self.data_wrapper(ui, plan, add_contents);
                }
                ui.end_row();
            })
            .response
    }

    fn show_row(
        &self,
        ui: &mut Ui,
        plan: &LayoutPlan,
        space_between: bool,
        add_contents: impl FnOnce(&mut Ui),
    ) -> Response {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = plan.region_gap;
            if plan.children_last {
                if plan.show_label_row {
                    self.label_wrapper(ui, plan);
                }
                if space_between {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.flex_wrapper(ui, plan, add_contents);
                    });
                } else {
                    self.flex_wrapper(ui, plan, add_contents);
                }
            } else {
                self.flex_wrapper(ui, plan, add_contents);
                if plan.show_label_row {
                    self.label_wrapper(ui, plan);
                }
            }
        })
        .response
    }

    /// The row wrapper around the child content. For reversed rows the
    /// validation message lives here, under the control.
    fn flex_wrapper(&self, ui: &mut Ui, plan: &LayoutPlan, add_contents: impl FnOnce(&mut Ui)) {
        ui.vertical(|ui| {
            add_contents(ui);
            if plan.error_slot == ErrorSlot::FlexWrapper {
                self.error_line(ui, plan);
            }
        });
    }

    fn label_wrapper(&self, ui: &mut Ui, plan: &LayoutPlan) {
        ui.vertical(|ui| {
            match plan.label_stack {
                LabelStack::JustifiedRow => {
                    ui.horizontal(|ui| {
                        self.label_line(ui, plan);
                        if let Some(optional) = self.label_optional {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(optional).weak().size(plan.text_points));
                            });
                        }
                    });
                }
                LabelStack::Column => {
                    self.label_line(ui, plan);
                    if let Some(optional) = self.label_optional {
                        ui.label(RichText::new(optional).weak().size(plan.text_points));
                    }
                }
            }
            if self.layout.is_flex() {
                self.description_block(ui, plan);
                if plan.error_slot == ErrorSlot::LabelWrapper {
                    self.error_line(ui, plan);
                }
            }
        });
    }

    /// beforeLabel, label, afterLabel, in that fixed order.
    fn label_line(&self, ui: &mut Ui, plan: &LayoutPlan) {
        if !self.config().has_label_content() {
            return;
        }
        ui.horizontal(|ui| {
            if let Some(before) = self.before_label {
                ui.label(RichText::new(before).weak().size(plan.text_points));
            }
            if let Some(label) = self.label {
                let text = RichText::new(label).size(plan.text_points);
                let text = match plan.label_variant {
                    LabelVariant::Managed if self.error.is_some() && !self.hide_message => {
                        text.color(COLOR_RED)
                    }
                    LabelVariant::Managed => text.strong(),
                    LabelVariant::Plain => text,
                };
                ui.label(text);
            }
            if let Some(after) = self.after_label {
                ui.label(RichText::new(after).weak().size(plan.text_points));
            }
        });
    }

    /// The non-row data block: padded child content, then the validation
    /// message, then the description.
    fn data_wrapper(&self, ui: &mut Ui, plan: &LayoutPlan, add_contents: impl FnOnce(&mut Ui)) {
        ui.vertical(|ui| {
            if plan.non_box_gap > 0.0 {
                ui.add_space(plan.non_box_gap);
            }
            add_contents(ui);
            if plan.non_box_gap > 0.0 {
                ui.add_space(plan.non_box_gap);
            }
            if plan.error_slot == ErrorSlot::DataWrapper {
                ui.add_space(ERROR_GAP);
                self.error_line(ui, plan);
            }
            self.description_block(ui, plan);
        });
    }

    fn description_block(&self, ui: &mut Ui, plan: &LayoutPlan) {
        if let Some(description) = self.description {
            if plan.description_gap > 0.0 {
                ui.add_space(plan.description_gap);
            }
            let points = if self.managed {
                plan.text_points
            } else {
                PLAIN_DESCRIPTION_POINTS
            };
            ui.label(RichText::new(description).weak().size(points));
        }
    }

    /// Renders whenever its slot is active; an empty message keeps the line
    /// reserved so the layout stays stable while validation toggles.
    fn error_line(&self, ui: &mut Ui, plan: &LayoutPlan) {
        let message = self.error.unwrap_or_default();
        ui.label(
            RichText::new(message)
                .color(COLOR_RED)
                .size(plan.text_points.min(PLAIN_DESCRIPTION_POINTS)),
        );
    }
}
