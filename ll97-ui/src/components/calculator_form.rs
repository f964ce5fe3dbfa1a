use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, TextAlign, Window, div, px, red,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState, MaskPattern},
    select::{Select, SelectState},
    v_flex,
};
use tracing::{error, info, warn};

use ll97_client::SubmissionClient;
use ll97_core::{ACCOUNTS, BUILDING_TYPES, FieldDescriptor, FormRecord, MissingField, UTILITY_FIELDS};

use crate::runtime;
use crate::utils::parse_field_decimal;

/// The data-entry form: two dropdowns, twelve numeric inputs, and the
/// validation messages from the last submit attempt.
///
/// The ten utility inputs are built from [`UTILITY_FIELDS`], so adding a
/// fuel type to the catalog adds its controls here without touching this
/// module.
pub struct CalculatorForm {
    client: SubmissionClient,

    account_number: Entity<SelectState<Vec<SharedString>>>,
    building_type: Entity<SelectState<Vec<SharedString>>>,
    area: Entity<InputState>,
    utilities: Vec<(FieldDescriptor, Entity<InputState>)>,
    solar_pv: Entity<InputState>,

    validation_errors: Vec<MissingField>,
}

impl CalculatorForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let account_labels: Vec<SharedString> = ACCOUNTS
            .iter()
            .map(|account| SharedString::from(account.label))
            .collect();
        let account_number = cx.new(|cx| SelectState::new(account_labels, None, window, cx));

        let building_labels: Vec<SharedString> = BUILDING_TYPES
            .iter()
            .map(|building_type| SharedString::from(*building_type))
            .collect();
        let building_type = cx.new(|cx| SelectState::new(building_labels, None, window, cx));

        let area = make_numeric_input("Area (SF)", window, cx);
        let utilities = UTILITY_FIELDS
            .iter()
            .map(|field| (*field, make_numeric_input(field.label, window, cx)))
            .collect();
        let solar_pv = make_numeric_input("Solar PV (kWh)", window, cx);

        Self {
            client: SubmissionClient::new(),
            account_number,
            building_type,
            area,
            utilities,
            solar_pv,
            validation_errors: Vec::new(),
        }
    }

    /// Collects the current control values into a [`FormRecord`].
    ///
    /// Empty numeric fields read back as 0; the two selects read back as
    /// empty strings until the user picks an option.
    pub fn to_record(
        &self,
        cx: &App,
    ) -> Result<FormRecord, anyhow::Error> {
        let mut record = FormRecord {
            account_number: self.selected_account_id(cx),
            building_type: self
                .building_type
                .read(cx)
                .selected_value()
                .map(|value| value.to_string())
                .unwrap_or_default(),
            area: parse_field_decimal(self.area.read(cx).value().as_str())?,
            solar_pv: parse_field_decimal(self.solar_pv.read(cx).value().as_str())?,
            ..FormRecord::default()
        };

        for (field, state) in &self.utilities {
            let value = parse_field_decimal(state.read(cx).value().as_str())?;
            record.set_utility(field.name, value)?;
        }

        Ok(record)
    }

    /// Validates and, if the record is complete, hands it to the
    /// submission client on the background runtime.
    ///
    /// The submit button stays live while a request is in flight; nothing
    /// here guards against overlapping submissions.
    pub fn submit(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.validation_errors.clear();

        let record = match self.to_record(cx) {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "form has an unparseable numeric field");
                cx.notify();
                return;
            }
        };

        match record.validate_for_submit() {
            Ok(()) => {
                info!(%record, "submitting form");
                let client = self.client.clone();
                runtime::background().spawn(async move {
                    match client.submit(&record).await {
                        Ok(response) => {
                            info!(status = %response.status(), "form submitted");
                        }
                        Err(error) => {
                            // Logged only; the form keeps its values so the
                            // user can submit again.
                            error!(%error, "form submission failed");
                        }
                    }
                });
            }
            Err(errors) => {
                warn!("cannot submit form due to validation errors");
                for error in &errors {
                    warn!(%error, "validation error");
                }
                self.validation_errors = errors;
            }
        }

        cx.notify();
    }

    /// Discards every entered value and validation message by rebuilding
    /// all control state at its defaults. Not reversible.
    pub fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("resetting form to defaults");
        *self = Self::new(window, cx);
        cx.notify();
    }

    /// Maps the displayed account label back to the stored account id.
    fn selected_account_id(
        &self,
        cx: &App,
    ) -> String {
        self.account_number
            .read(cx)
            .selected_value()
            .and_then(|label| ACCOUNTS.iter().find(|account| account.label == label.as_ref()))
            .map(|account| account.id.to_string())
            .unwrap_or_default()
    }

    fn validation_message(
        &self,
        name: &str,
    ) -> Option<Div> {
        self.validation_errors
            .iter()
            .find(|error| error.name == name)
            .map(|error| {
                div()
                    .pl(px(170.))
                    .text_sm()
                    .text_color(red())
                    .child(error.to_string())
            })
    }
}

impl Render for CalculatorForm {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let account_select = Select::new(&self.account_number).w_full();
        let building_select = Select::new(&self.building_type).w_full();

        let mut utility_rows = v_flex().gap_2();
        for (field, state) in &self.utilities {
            utility_rows = utility_rows.child(make_input_row(state, field.label));
        }

        v_flex()
            .size_full()
            .gap_2()
            .child(
                div()
                    .text_lg()
                    .text_align(TextAlign::Center)
                    .child("LL97 Calculator Form"),
            )
            .child(make_select_row("Account Number:", account_select))
            .children(self.validation_message("accountNumber"))
            .child(make_section_heading("Building Inputs"))
            .child(make_select_row("Building Type:", building_select))
            .children(self.validation_message("buildingType"))
            .child(make_input_row(&self.area, "Area (SF):"))
            .child(make_section_heading("Utility Inputs"))
            .child(utility_rows)
            .child(make_section_heading("Carbon Deduction"))
            .child(make_input_row(&self.solar_pv, "Solar PV (kWh):"))
    }
}

fn make_numeric_input(
    label: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<CalculatorForm>,
) -> Entity<InputState> {
    let pattern: MaskPattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(4),
    };

    cx.new(|cx| {
        InputState::new(window, cx)
            .mask_pattern(pattern)
            .placeholder(label.into())
    })
}

fn make_section_heading(label: impl Into<SharedString>) -> Div {
    div().mt_2().text_lg().child(label.into())
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Creates a labeled row containing a text label and an already-rendered
/// [`Select`] dropdown, styled consistently with [`make_input_row`].
fn make_select_row(
    label: impl Into<SharedString>,
    select_element: impl IntoElement,
) -> Div {
    make_labeled_row(label).child(select_element)
}

/// Creates the common outer container and label used by both input and
/// select rows, ensuring consistent alignment, spacing, and border styling.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(160.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
