//! # Centrum GUI Application
//!
//! Desktop interface for the central tendency calculator. Built with the
//! Iced framework: a single window holding the session sidebar, the data
//! entry form, and the chart/results panel.
//!
//! State lives in [`App`]; every interaction is a [`Message`] handled in
//! [`App::update`]. Data is re-parsed from the input text on every
//! calculation, so nothing but the raw strings is ever stored.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use iced::widget::{column, row, stack, Space};
use iced::{Element, Length, Size, Task, Theme};
use uuid::Uuid;

use stat_core::charts::{ChartKind, ChartModel};
use stat_core::descriptive::{self, Summary};
use stat_core::errors::StatError;
use stat_core::file_io::{self, FileLock};
use stat_core::sample::Sample;
use stat_core::session::{Dataset, Session};

mod ui;
mod update;

use ui::modal::{ModalType, PendingAction};
use update::UpdateCheckResult;

/// Share of the central area given to the input panel; the results panel
/// takes the rest.
const INPUT_PANEL_RATIO: f32 = 0.40;

/// Sidebar width in pixels
const ITEMS_PANEL_WIDTH: f32 = 190.0;

pub fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1000.0, 700.0))
        .antialiasing(true)
        .run()
}

/// Sections of the items panel that can be collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSection {
    SessionInfo,
    Datasets,
}

/// What the center panel is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSelection {
    DataEntry,
    SessionInfo,
}

/// Result of the last successful calculation
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: Summary,
    pub chart: ChartModel,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Data entry
    InputChanged(String),
    DatasetLabelChanged(String),
    Calculate,
    Reset,
    ChartKindSelected(ChartKind),

    // Sidebar
    ToggleSection(ItemSection),
    SelectSessionInfo,
    SelectDataEntry,
    StoreDataset,
    SelectDataset(Uuid),
    DeleteSelectedDataset,

    // Session metadata
    AnalystChanged(String),
    TitleChanged(String),

    // File operations
    NewSession,
    OpenSession,
    SaveSession,
    SaveSessionAs,
    OpenPathSelected(Option<PathBuf>),
    SavePathSelected(Option<PathBuf>),

    // Settings
    ToggleSettingsMenu,
    ToggleDarkMode,
    CheckForUpdates,
    UpdateCheckCompleted(UpdateCheckResult),

    // Modal dialogs
    ModalSave,
    ModalDontSave,
    ModalCancel,
    ModalOpenRelease,
    ModalDownloadUpdate,
}

pub struct App {
    // Session state
    pub session: Session,
    pub current_file: Option<PathBuf>,
    pub is_modified: bool,
    file_lock: Option<FileLock>,
    pub lock_holder: Option<String>,

    // Editor state
    pub selection: EditorSelection,
    pub loaded_dataset: Option<Uuid>,
    pub dataset_label: String,
    pub input_value: String,
    pub chart_kind: ChartKind,
    pub analysis: Option<Analysis>,
    pub parse_error: Option<StatError>,

    // Chrome
    pub collapsed_sections: HashSet<ItemSection>,
    pub status: String,
    pub settings_menu_open: bool,
    pub dark_mode: bool,
    pub modal: Option<ModalType>,
    pending_action: Option<PendingAction>,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let session = Session::new(whoami::realname(), "Untitled");
        let chart_kind = session.settings.default_chart;

        let app = App {
            session,
            current_file: None,
            is_modified: false,
            file_lock: None,
            lock_holder: None,
            selection: EditorSelection::DataEntry,
            loaded_dataset: None,
            dataset_label: String::new(),
            input_value: String::new(),
            chart_kind,
            analysis: None,
            parse_error: None,
            collapsed_sections: HashSet::new(),
            status: format!("Centrum {} ready", update::CURRENT_VERSION),
            settings_menu_open: false,
            dark_mode: false,
            modal: None,
            pending_action: None,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let file = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let modified = if self.is_modified { "*" } else { "" };
        format!("Centrum - {}{}", file, modified)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The three statistic labels shown in the data entry form.
    ///
    /// Malformed input replaces every label with "Invalid input".
    pub fn stat_labels(&self) -> (String, String, String) {
        if self.parse_error.is_some() {
            descriptive::invalid_input_labels()
        } else if let Some(ref analysis) = self.analysis {
            (
                analysis.summary.mean_label(),
                analysis.summary.median_label(),
                analysis.summary.mode_label(),
            )
        } else {
            (
                "Mean = ".to_string(),
                "Median = ".to_string(),
                "Mode = ".to_string(),
            )
        }
    }

    /// Re-parse the input text and rebuild summary + chart.
    fn recompute(&mut self) {
        match Sample::parse(&self.input_value) {
            Ok(sample) => {
                let summary = Summary::compute(&sample);
                let chart = ChartModel::build_with_bins(
                    self.chart_kind,
                    &sample,
                    &summary,
                    self.session.settings.histogram_bins,
                );
                self.status = format!("Computed statistics for {} values", summary.count);
                self.analysis = Some(Analysis { summary, chart });
                self.parse_error = None;
            }
            Err(e) => {
                self.analysis = None;
                self.parse_error = Some(e);
                self.status = "Invalid input".to_string();
            }
        }
    }

    fn start_new_session(&mut self) {
        self.file_lock = None;
        self.lock_holder = None;
        self.current_file = None;
        self.session = Session::new(whoami::realname(), "Untitled");
        self.chart_kind = self.session.settings.default_chart;
        self.is_modified = false;
        self.selection = EditorSelection::DataEntry;
        self.loaded_dataset = None;
        self.dataset_label.clear();
        self.input_value.clear();
        self.analysis = None;
        self.parse_error = None;
        self.status = "New session".to_string();
    }

    fn open_from(&mut self, path: &Path) {
        match file_io::load_session_with_lock_check(path) {
            Ok((session, lock_info)) => {
                // Release any lock held on the previous file
                self.file_lock = None;
                self.lock_holder =
                    lock_info.map(|info| format!("{} ({})", info.user_id, info.machine));

                if self.lock_holder.is_none() {
                    match FileLock::acquire(path, whoami::username()) {
                        Ok(lock) => self.file_lock = Some(lock),
                        Err(StatError::FileLocked { locked_by, .. }) => {
                            self.lock_holder = Some(locked_by);
                        }
                        // The lock is advisory; saving retries and reports
                        Err(_) => {}
                    }
                }

                self.chart_kind = session.settings.default_chart;
                self.session = session;
                self.current_file = Some(path.to_path_buf());
                self.is_modified = false;
                self.selection = EditorSelection::DataEntry;
                self.loaded_dataset = None;
                self.dataset_label.clear();
                self.input_value.clear();
                self.analysis = None;
                self.parse_error = None;
                self.status = if self.lock_holder.is_some() {
                    format!("Opened {} (read-only)", path.display())
                } else {
                    format!("Opened {}", path.display())
                };
            }
            Err(e) => {
                self.status = format!("Open failed: {}", e);
            }
        }
    }

    /// Save the session, acquiring the lock for `path` first if needed.
    /// Returns true on success.
    fn save_to(&mut self, path: &Path) -> bool {
        if self.lock_holder.is_some() {
            self.status = "Session is read-only (locked by another user)".to_string();
            return false;
        }

        let holds_lock = self
            .file_lock
            .as_ref()
            .is_some_and(|lock| lock.session_path() == path);
        if !holds_lock {
            self.file_lock = None;
            match FileLock::acquire(path, whoami::username()) {
                Ok(lock) => self.file_lock = Some(lock),
                Err(e) => {
                    self.status = format!("Save failed: {}", e);
                    return false;
                }
            }
        }

        match file_io::save_session(&self.session, path) {
            Ok(()) => {
                self.current_file = Some(path.to_path_buf());
                self.is_modified = false;
                self.status = format!("Saved {}", path.display());
                true
            }
            Err(e) => {
                self.status = format!("Save failed: {}", e);
                false
            }
        }
    }

    fn execute_pending(&mut self) -> Task<Message> {
        match self.pending_action.take() {
            Some(PendingAction::NewSession) => {
                self.start_new_session();
                Task::none()
            }
            Some(PendingAction::OpenSession) => {
                Task::perform(pick_open_path(), Message::OpenPathSelected)
            }
            None => Task::none(),
        }
    }

    fn prompt_unsaved(&mut self, action: PendingAction) {
        self.modal = Some(ModalType::UnsavedChanges { action });
        self.pending_action = Some(action);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ===== Data entry =====
            Message::InputChanged(value) => {
                self.input_value = value;
                Task::none()
            }
            Message::DatasetLabelChanged(value) => {
                self.dataset_label = value;
                Task::none()
            }
            Message::Calculate => {
                self.recompute();
                Task::none()
            }
            Message::Reset => {
                self.input_value.clear();
                self.dataset_label.clear();
                self.analysis = None;
                self.parse_error = None;
                self.loaded_dataset = None;
                self.status = "Cleared".to_string();
                Task::none()
            }
            Message::ChartKindSelected(kind) => {
                self.chart_kind = kind;
                self.session.settings.default_chart = kind;
                self.is_modified = true;
                // Redraw immediately from whatever is in the input field
                if self.analysis.is_some() || !self.input_value.trim().is_empty() {
                    self.recompute();
                }
                Task::none()
            }

            // ===== Sidebar =====
            Message::ToggleSection(section) => {
                if !self.collapsed_sections.remove(&section) {
                    self.collapsed_sections.insert(section);
                }
                Task::none()
            }
            Message::SelectSessionInfo => {
                self.selection = EditorSelection::SessionInfo;
                Task::none()
            }
            Message::SelectDataEntry => {
                self.selection = EditorSelection::DataEntry;
                Task::none()
            }
            Message::StoreDataset => {
                if self.input_value.trim().is_empty() {
                    self.status = "Nothing to store - enter data first".to_string();
                    return Task::none();
                }

                let label = if self.dataset_label.trim().is_empty() {
                    format!("Dataset {}", self.session.dataset_count() + 1)
                } else {
                    self.dataset_label.trim().to_string()
                };

                // "+" updates the loaded dataset in place, or stores a new one
                let existing = self
                    .loaded_dataset
                    .filter(|id| self.session.get_dataset(id).is_some());
                match existing {
                    Some(id) => {
                        if let Some(dataset) = self.session.datasets.get_mut(&id) {
                            dataset.label = label.clone();
                            dataset.raw = self.input_value.clone();
                        }
                        self.session.touch();
                        self.status = format!("Updated dataset '{}'", label);
                    }
                    None => {
                        let id = self
                            .session
                            .add_dataset(Dataset::new(label.clone(), self.input_value.clone()));
                        self.loaded_dataset = Some(id);
                        self.dataset_label = label.clone();
                        self.status = format!("Stored dataset '{}'", label);
                    }
                }
                self.is_modified = true;
                Task::none()
            }
            Message::SelectDataset(id) => {
                if let Some(dataset) = self.session.get_dataset(&id).cloned() {
                    self.dataset_label = dataset.label;
                    self.input_value = dataset.raw;
                    self.loaded_dataset = Some(id);
                    self.selection = EditorSelection::DataEntry;
                    self.recompute();
                }
                Task::none()
            }
            Message::DeleteSelectedDataset => {
                if let Some(id) = self.loaded_dataset.take() {
                    if let Some(dataset) = self.session.remove_dataset(&id) {
                        self.is_modified = true;
                        self.status = format!("Deleted dataset '{}'", dataset.label);
                    }
                }
                Task::none()
            }

            // ===== Session metadata =====
            Message::AnalystChanged(value) => {
                self.session.meta.analyst = value;
                self.session.touch();
                self.is_modified = true;
                Task::none()
            }
            Message::TitleChanged(value) => {
                self.session.meta.title = value;
                self.session.touch();
                self.is_modified = true;
                Task::none()
            }

            // ===== File operations =====
            Message::NewSession => {
                if self.is_modified {
                    self.prompt_unsaved(PendingAction::NewSession);
                    Task::none()
                } else {
                    self.start_new_session();
                    Task::none()
                }
            }
            Message::OpenSession => {
                if self.is_modified {
                    self.prompt_unsaved(PendingAction::OpenSession);
                    Task::none()
                } else {
                    Task::perform(pick_open_path(), Message::OpenPathSelected)
                }
            }
            Message::SaveSession => match self.current_file.clone() {
                Some(path) => {
                    self.save_to(&path);
                    Task::none()
                }
                None => Task::perform(pick_save_path(), Message::SavePathSelected),
            },
            Message::SaveSessionAs => Task::perform(pick_save_path(), Message::SavePathSelected),
            Message::OpenPathSelected(Some(path)) => {
                self.open_from(&path);
                Task::none()
            }
            Message::OpenPathSelected(None) => {
                self.status = "Open cancelled".to_string();
                Task::none()
            }
            Message::SavePathSelected(Some(path)) => {
                let path = ensure_cts_extension(path);
                if self.save_to(&path) {
                    self.execute_pending()
                } else {
                    self.pending_action = None;
                    Task::none()
                }
            }
            Message::SavePathSelected(None) => {
                self.status = "Save cancelled".to_string();
                self.pending_action = None;
                Task::none()
            }

            // ===== Settings =====
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.settings_menu_open = false;
                Task::none()
            }
            Message::CheckForUpdates => {
                self.settings_menu_open = false;
                self.status = "Checking for updates...".to_string();
                Task::perform(update::check_for_updates(), Message::UpdateCheckCompleted)
            }
            Message::UpdateCheckCompleted(result) => {
                match result {
                    UpdateCheckResult::UpdateAvailable(info) => {
                        self.status = format!("Update {} available", info.version);
                        self.modal = Some(ModalType::UpdateAvailable {
                            version: info.version,
                            download_url: info.download_url,
                            html_url: info.html_url,
                        });
                    }
                    UpdateCheckResult::UpToDate => {
                        self.status = format!("Up to date ({})", update::CURRENT_VERSION);
                    }
                    UpdateCheckResult::Failed(reason) => {
                        self.status = format!("Update check failed: {}", reason);
                    }
                }
                Task::none()
            }

            // ===== Modal dialogs =====
            Message::ModalSave => {
                self.modal = None;
                match self.current_file.clone() {
                    Some(path) => {
                        if self.save_to(&path) {
                            self.execute_pending()
                        } else {
                            self.pending_action = None;
                            Task::none()
                        }
                    }
                    // No path yet: save-as first, the pending action runs
                    // after a successful save
                    None => Task::perform(pick_save_path(), Message::SavePathSelected),
                }
            }
            Message::ModalDontSave => {
                self.modal = None;
                self.is_modified = false;
                self.execute_pending()
            }
            Message::ModalCancel => {
                self.modal = None;
                self.pending_action = None;
                Task::none()
            }
            Message::ModalOpenRelease => {
                if let Some(ModalType::UpdateAvailable { html_url, .. }) = self.modal.take() {
                    update::open_url(&html_url);
                }
                Task::none()
            }
            Message::ModalDownloadUpdate => {
                if let Some(ModalType::UpdateAvailable { download_url, .. }) = self.modal.take() {
                    update::open_url(&download_url);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header("Central Tendency Calculator".to_string());
        let toolbar = ui::toolbar::view_toolbar(self.settings_menu_open);

        let mut chrome = column![header, toolbar].spacing(4);
        if self.settings_menu_open {
            chrome = chrome.push(row![
                Space::new().width(Length::Fill),
                ui::toolbar::view_settings_menu(self.dark_mode),
            ]);
        }

        let main_row = row![
            ui::items_panel::view_items_panel(
                &self.session,
                &self.collapsed_sections,
                &self.selection,
                self.loaded_dataset,
                ITEMS_PANEL_WIDTH,
            ),
            ui::input_panel::view_input_panel(self, INPUT_PANEL_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_PANEL_RATIO),
        ]
        .spacing(6)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(
            &self.current_file,
            self.is_modified,
            &self.lock_holder,
            &self.status,
        );

        let base: Element<'_, Message> = column![chrome, main_row, status_bar]
            .padding(8)
            .spacing(6)
            .into();

        match &self.modal {
            Some(modal_type) => stack![
                base,
                ui::modal::view_backdrop(),
                ui::modal::view_modal(modal_type),
            ]
            .into(),
            None => base,
        }
    }
}

fn ensure_cts_extension(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "cts" => path,
        _ => path.with_extension("cts"),
    }
}

async fn pick_open_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Centrum Session", &["cts"])
        .set_title("Open Session")
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

async fn pick_save_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Centrum Session", &["cts"])
        .set_file_name("session.cts")
        .set_title("Save Session As")
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
