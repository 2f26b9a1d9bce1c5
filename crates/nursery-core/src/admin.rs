//! Catalog Administration
//!
//! Create/edit dialog state machine and the admin screen's data.
//!
//! Dialog transitions:
//! - `open_create`: -> Creating (empty form)
//! - `open_edit(plant)`: -> Editing(plant) (form filled from the plant)
//! - `cancel` or a successful submit: -> Closed (form reset)
//! - a failed submit keeps the dialog open with the entered values
//!
//! Only one submit may be in flight at a time, and the dialog stays as it is
//! until that submit is answered.
//!
//! The console is driven in steps so the caller can run the requests:
//! `enter` then `finish_refresh` with the listing, and `begin_submit`, the
//! upsert, `finish_submit` and (when asked to) another listing.

use log::{info, warn};

use crate::api::Upsert;
use crate::domain::{Plant, PlantDraft};
use crate::error::Result;
use crate::notice::Notice;
use crate::session::{AccessDenied, Session};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Creating,
    Editing(Plant),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminDialog {
    state: DialogState,
    form: PlantDraft,
    pending: bool,
}

impl AdminDialog {
    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn form(&self) -> &PlantDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlantDraft {
        &mut self.form
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            DialogState::Editing(_) => "Edit plant",
            DialogState::Creating | DialogState::Closed => "New plant",
        }
    }

    /// Ignored while a submit is in flight
    pub fn open_create(&mut self) {
        if self.pending {
            return;
        }
        self.state = DialogState::Creating;
        self.form = PlantDraft::default();
    }

    /// Ignored while a submit is in flight
    pub fn open_edit(&mut self, plant: &Plant) {
        if self.pending {
            return;
        }
        self.state = DialogState::Editing(plant.clone());
        self.form = PlantDraft::from(plant);
    }

    /// Ignored while a submit is in flight
    pub fn cancel(&mut self) {
        if self.pending {
            return;
        }
        self.close();
    }

    fn close(&mut self) {
        self.state = DialogState::Closed;
        self.form = PlantDraft::default();
    }

    /// Validate the form and mark a submit as in flight.
    ///
    /// Returns `Ok(None)` when the dialog is closed or a submit is already
    /// outstanding, so a double click cannot create the plant twice.
    pub fn begin_submit(&mut self) -> Result<Option<Upsert>> {
        let id = match &self.state {
            DialogState::Closed => return Ok(None),
            DialogState::Creating => None,
            DialogState::Editing(plant) => Some(plant.id),
        };
        if self.pending {
            return Ok(None);
        }
        self.form.validate()?;
        self.pending = true;
        Ok(Some(Upsert::from_draft(id, self.form.clone())))
    }

    /// Apply the service's answer to a submit started with `begin_submit`
    pub fn finish_submit(&mut self, request: &Upsert, outcome: &Result<()>) -> Notice {
        self.pending = false;
        match outcome {
            Ok(()) => {
                self.close();
                let title = if request.is_edit() { "Plant updated" } else { "Plant added" };
                Notice::info(title, "Changes saved")
            }
            Err(e) => {
                warn!("Saving plant failed: {}", e);
                Notice::from_error("Could not save changes", e)
            }
        }
    }
}

/// What to do once a submit has been answered
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReply {
    pub notice: Notice,
    /// The list is stale and already marked as loading; fetch it again
    pub reload: bool,
}

/// State behind the admin screen
#[derive(Debug, Clone, PartialEq)]
pub struct AdminConsole {
    plants: Vec<Plant>,
    loading: bool,
    pub dialog: AdminDialog,
}

impl Default for AdminConsole {
    fn default() -> Self {
        Self {
            plants: Vec::new(),
            loading: true,
            dialog: AdminDialog::default(),
        }
    }
}

impl AdminConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Run the admin gate. On `Ok` the caller fetches the catalog and hands it
    /// to `finish_refresh`; on `Err` nothing may be fetched.
    pub fn enter(&mut self, session: &Session) -> std::result::Result<(), AccessDenied> {
        let user = match session.require_admin() {
            Ok(user) => user,
            Err(denied) => {
                info!("Admin screen refused: {:?}", denied);
                return Err(denied);
            }
        };
        info!("Admin {} opened the catalog editor", user.id);
        self.loading = true;
        Ok(())
    }

    /// Apply a catalog listing. On failure the previous list is kept.
    pub fn finish_refresh(&mut self, result: Result<Vec<Plant>>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(plants) => {
                self.plants = plants;
                None
            }
            Err(e) => {
                warn!("Loading plants failed: {}", e);
                Some(Notice::from_error("Could not load plants", &e))
            }
        }
    }

    /// Start saving the dialog. `Ok(None)` means there is nothing to send.
    pub fn begin_submit(&mut self) -> std::result::Result<Option<Upsert>, Notice> {
        self.dialog
            .begin_submit()
            .map_err(|e| Notice::from_error("Check the form", &e))
    }

    /// Apply the upsert answer; a successful save asks for a reload
    pub fn finish_submit(&mut self, request: &Upsert, outcome: &Result<()>) -> SubmitReply {
        let notice = self.dialog.finish_submit(request, outcome);
        let reload = outcome.is_ok();
        if reload {
            self.loading = true;
        }
        SubmitReply { notice, reload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_plant(id: i64) -> Plant {
        Plant {
            id,
            name: "Scots pine".to_string(),
            category: "Conifers".to_string(),
            price: 1200.0,
            image_url: String::new(),
            description: "Height 40-60 cm".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_open_create_starts_blank() {
        let mut dialog = AdminDialog::default();
        dialog.open_create();
        assert_eq!(dialog.state(), &DialogState::Creating);
        assert_eq!(dialog.form(), &PlantDraft::default());
        assert_eq!(dialog.title(), "New plant");
    }

    #[test]
    fn test_open_edit_fills_form() {
        let mut dialog = AdminDialog::default();
        let plant = make_plant(1);
        dialog.open_edit(&plant);
        assert_eq!(dialog.state(), &DialogState::Editing(plant.clone()));
        assert_eq!(dialog.form().name, plant.name);
        assert_eq!(dialog.title(), "Edit plant");
    }

    #[test]
    fn test_cancel_closes_and_resets() {
        let mut dialog = AdminDialog::default();
        dialog.open_edit(&make_plant(1));
        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.form(), &PlantDraft::default());
    }

    #[test]
    fn test_submit_from_closed_does_nothing() {
        let mut dialog = AdminDialog::default();
        assert_eq!(dialog.begin_submit(), Ok(None));
        assert!(!dialog.is_pending());
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let mut dialog = AdminDialog::default();
        dialog.open_create();
        assert!(matches!(dialog.begin_submit(), Err(Error::Validation(_))));
        assert!(!dialog.is_pending());
        assert!(dialog.is_open());
    }

    #[test]
    fn test_second_submit_while_pending_is_refused() {
        let mut dialog = AdminDialog::default();
        dialog.open_create();
        dialog.form_mut().name = "Hosta".to_string();
        dialog.form_mut().category = "Perennials".to_string();

        let first = dialog.begin_submit().unwrap();
        assert!(matches!(first, Some(Upsert::Create(_))));
        assert_eq!(dialog.begin_submit(), Ok(None));
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut dialog = AdminDialog::default();
        dialog.open_edit(&make_plant(3));
        dialog.form_mut().price = 1999.0;
        let request = dialog.begin_submit().unwrap().unwrap();

        let notice = dialog.finish_submit(&request, &Err(Error::Network("offline".to_string())));
        assert!(notice.is_destructive());
        assert!(dialog.is_open());
        assert!(!dialog.is_pending());
        assert_eq!(dialog.form().price, 1999.0);
    }

    #[test]
    fn test_successful_submit_closes() {
        let mut dialog = AdminDialog::default();
        dialog.open_edit(&make_plant(3));
        let request = dialog.begin_submit().unwrap().unwrap();
        let notice = dialog.finish_submit(&request, &Ok(()));
        assert_eq!(notice.title, "Plant updated");
        assert_eq!(dialog.state(), &DialogState::Closed);
    }

    #[test]
    fn test_dialog_is_frozen_while_submit_in_flight() {
        let mut dialog = AdminDialog::default();
        dialog.open_edit(&make_plant(4));
        dialog.form_mut().name = "Dwarf pine".to_string();
        let request = dialog.begin_submit().unwrap().unwrap();

        dialog.cancel();
        dialog.open_create();
        assert_eq!(dialog.state(), &DialogState::Editing(make_plant(4)));
        assert_eq!(dialog.form().name, "Dwarf pine");

        // the late answer applies to the dialog that sent it
        dialog.finish_submit(&request, &Ok(()));
        assert_eq!(dialog.state(), &DialogState::Closed);

        dialog.open_create();
        dialog.form_mut().name = "Hosta".to_string();
        dialog.form_mut().category = "Perennials".to_string();
        assert!(matches!(dialog.begin_submit(), Ok(Some(Upsert::Create(_)))));
    }

    #[test]
    fn test_cancel_after_failed_submit_closes() {
        let mut dialog = AdminDialog::default();
        dialog.open_edit(&make_plant(5));
        let request = dialog.begin_submit().unwrap().unwrap();
        dialog.finish_submit(&request, &Err(Error::Network("offline".to_string())));

        dialog.cancel();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_successful_console_submit_asks_for_reload() {
        let mut console = AdminConsole::new();
        console.finish_refresh(Ok(vec![make_plant(1)]));
        console.dialog.open_edit(&make_plant(1));
        let request = console.begin_submit().unwrap().unwrap();

        let reply = console.finish_submit(&request, &Ok(()));
        assert!(reply.reload);
        assert!(console.is_loading());

        console.dialog.open_edit(&make_plant(1));
        let request = console.begin_submit().unwrap().unwrap();
        let reply = console.finish_submit(&request, &Err(Error::Network("offline".to_string())));
        assert!(!reply.reload);
        assert!(reply.notice.is_destructive());
    }

    #[test]
    fn test_console_reports_invalid_form_as_notice() {
        let mut console = AdminConsole::new();
        console.dialog.open_create();
        let notice = console.begin_submit().unwrap_err();
        assert_eq!(notice.title, "Check the form");
        assert!(!console.dialog.is_pending());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let mut console = AdminConsole::new();
        assert!(console.is_loading());
        assert!(console.finish_refresh(Ok(vec![make_plant(1)])).is_none());

        let notice = console.finish_refresh(Err(Error::Service {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(notice.is_some());
        assert!(!console.is_loading());
        assert_eq!(console.plants().len(), 1);
    }
}
