use aroov_client::GatewayError;
use aroov_types::{AvailabilityRequest, CalendarEvent, DateRange};
use std::cell::RefCell;
use tracing::{debug, warn};

use crate::context::PageContext;
use crate::document::{Anchor, ButtonState, Field};
use crate::error::{Error, Result};

pub const CONFIRM_BUTTON: &str = "save-avail-btn";
const CONFIRM_LABEL: &str = "Confirm";
const SAVING_LABEL: &str = "Saving...";

/// Free-date ranges on the profile calendar.
///
/// The calendar widget itself is out of scope; this owns the events it is fed,
/// the date-range dialog and the requests behind them.
pub struct AvailabilityPlanner {
    ctx: PageContext,
    selection: RefCell<Option<DateRange>>,
    events: RefCell<Vec<CalendarEvent>>,
}

impl AvailabilityPlanner {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            selection: RefCell::new(None),
            events: RefCell::new(Vec::new()),
        }
    }

    /// Fetch every calendar event (trips and availability).
    pub async fn refresh(&self) -> std::result::Result<Vec<CalendarEvent>, GatewayError> {
        let events = self.ctx.api.calendar().await?;
        *self.events.borrow_mut() = events.clone();
        Ok(events)
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.events.borrow().clone()
    }

    pub fn selection(&self) -> Option<DateRange> {
        *self.selection.borrow()
    }

    /// Open the dialog for a dragged range. The label shows the last day
    /// rather than the exclusive end.
    pub fn select_range(&self, range: DateRange) {
        let document = &self.ctx.document;
        document.set_text(Anchor::AvailabilityRange, &range.label());
        document.set_button(CONFIRM_BUTTON, ButtonState::enabled(CONFIRM_LABEL));
        document.show(Anchor::AvailabilityModal);
        *self.selection.borrow_mut() = Some(range);
    }

    pub fn cancel(&self) {
        self.ctx.document.hide(Anchor::AvailabilityModal);
        *self.selection.borrow_mut() = None;
    }

    pub async fn save(&self, note: &str) -> Result<AvailabilityRequest> {
        let Some(range) = self.selection() else {
            return Err(Error::InvalidInput("No dates selected".to_string()));
        };
        let request = AvailabilityRequest::new(range, note.trim());

        let document = &self.ctx.document;
        document.set_value(Field::EventNote, note);
        document.set_button(CONFIRM_BUTTON, ButtonState::busy(SAVING_LABEL));
        let response = self.ctx.api.add_availability(&request).await;
        document.set_button(CONFIRM_BUTTON, ButtonState::enabled(CONFIRM_LABEL));

        match response {
            Ok(()) => {
                if let Err(err) = self.refresh().await {
                    warn!(error = %err, "could not refresh calendar");
                }
                document.hide(Anchor::AvailabilityModal);
                document.set_value(Field::EventNote, "");
                *self.selection.borrow_mut() = None;
                Ok(request)
            }
            Err(err) => {
                let message = if err.is_network() {
                    "Server error."
                } else {
                    "Failed to save. Please try again."
                };
                self.ctx.host.alert(message);
                Err(err.into())
            }
        }
    }

    /// Delete an availability range after confirmation. Other events (booked
    /// trips) cannot be removed here; `Ok(false)` means nothing was sent.
    pub async fn remove(&self, event: &CalendarEvent) -> Result<bool> {
        if !event.is_user_availability() {
            debug!(id = %event.id, "only availability ranges can be removed");
            return Ok(false);
        }
        let question = format!("Remove availability for \"{}\"?", event.title);
        if !self.ctx.host.confirm(&question) {
            return Ok(false);
        }

        self.ctx.api.remove_availability(&event.id).await?;
        self.events.borrow_mut().retain(|e| e.id != event.id);
        Ok(true)
    }
}
