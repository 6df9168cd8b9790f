use std::sync::Arc;

use iced::{Element, Size, Subscription, Task, Theme};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::catalog::load_catalog;
use state::data::Catalog;
use state::sort::SortCriterion;
use ui::cards::CategoryChoice;
use ui::controller::Session;
use ui::viewport::{Debouncer, Ticket};

/// Where the startup load stands
#[derive(Debug)]
enum LoadState {
    Loading,
    Failed,
    Ready(Session),
}

/// Main application state
struct CatalogBrowser {
    config: Config,
    load: LoadState,
    /// Last settled viewport width
    width: f32,
    resize: Debouncer<f32>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup load finished
    CatalogLoaded(Result<Arc<Catalog>, String>),
    CategorySelected(CategoryChoice),
    MinPriceChanged(String),
    MaxPriceChanged(String),
    /// Price filter button pressed (or Enter in a price field)
    ApplyPriceFilter,
    SortPressed(SortCriterion),
    ResetFilters,
    /// Raw window resize event
    WindowResized(Size),
    /// The debounce window for a resize has elapsed
    ResizeSettled(Ticket),
}

impl CatalogBrowser {
    /// Create the application and start loading the catalog
    fn new(config: Config) -> (Self, Task<Message>) {
        let path = config.catalog_path.clone();
        let browser = CatalogBrowser {
            width: config.window_width,
            resize: Debouncer::new(config.resize_debounce()),
            load: LoadState::Loading,
            config,
        };

        let task = Task::perform(load_catalog(path), |result| {
            Message::CatalogLoaded(result.map(Arc::new).map_err(|err| err.to_string()))
        });

        (browser, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                let catalog = Arc::unwrap_or_clone(catalog);
                self.load = LoadState::Ready(Session::new(
                    catalog,
                    self.width,
                    self.config.currency.clone(),
                ));
                Task::none()
            }
            Message::CatalogLoaded(Err(err)) => {
                error!("Catalog load failed: {}", err);
                self.load = LoadState::Failed;
                // nothing left to patch
                self.resize.cancel();
                Task::none()
            }
            Message::WindowResized(size) => {
                let ticket = self.resize.schedule(size.width);
                let window = self.resize.window();
                Task::perform(
                    async move { tokio::time::sleep(window).await },
                    move |()| Message::ResizeSettled(ticket),
                )
            }
            Message::ResizeSettled(ticket) => {
                if let Some(width) = self.resize.fire(ticket) {
                    debug!("Resize settled at {} px", width);
                    self.width = width;
                    if let LoadState::Ready(session) = &mut self.load {
                        session.resize(width);
                    }
                }
                Task::none()
            }
            message => {
                // Everything else needs a loaded catalog; controls are inert until then
                if let LoadState::Ready(session) = &mut self.load {
                    handle_control(session, message);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.load {
            LoadState::Loading => ui::cards::loading(),
            LoadState::Failed => ui::cards::load_failed(),
            LoadState::Ready(session) => ui::cards::catalog_screen(session),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Route a control event to the session
fn handle_control(session: &mut Session, message: Message) {
    match message {
        Message::CategorySelected(choice) => session.select_category(choice.into_category()),
        Message::MinPriceChanged(value) => session.set_min_input(value),
        Message::MaxPriceChanged(value) => session.set_max_input(value),
        Message::ApplyPriceFilter => session.apply_price_filter(),
        Message::SortPressed(criterion) => session.press_sort(criterion),
        Message::ResetFilters => session.reset(),
        Message::CatalogLoaded(_) | Message::WindowResized(_) | Message::ResizeSettled(_) => {}
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> iced::Result {
    let (config, config_error) = match Config::load() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(&config.log_filter);

    match config_error {
        Some(err) => error!("{}; using default settings", err),
        None => info!("🎨 Catalog browser starting with {:?}", config),
    }

    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Catalog Browser", CatalogBrowser::update, CatalogBrowser::view)
        .subscription(CatalogBrowser::subscription)
        .theme(CatalogBrowser::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || CatalogBrowser::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::{catalog, product};

    fn ready_browser() -> CatalogBrowser {
        let (mut browser, _) = CatalogBrowser::new(Config::default());
        let catalog = catalog(
            vec![product("B", 10.0, 4.0, "X"), product("A", 5.0, 4.0, "Y")],
            &["X", "Y"],
        );
        let _ = browser.update(Message::CatalogLoaded(Ok(Arc::new(catalog))));
        browser
    }

    fn shown(browser: &CatalogBrowser) -> Vec<String> {
        match &browser.load {
            LoadState::Ready(session) => session.cards().iter().map(|c| c.name.clone()).collect(),
            other => panic!("catalog not ready: {:?}", other),
        }
    }

    #[test]
    fn test_controls_are_inert_while_loading() {
        let (mut browser, _) = CatalogBrowser::new(Config::default());
        let _ = browser.update(Message::SortPressed(SortCriterion::Name));
        assert!(matches!(browser.load, LoadState::Loading));
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let (mut browser, _) = CatalogBrowser::new(Config::default());
        let pending = browser.resize.schedule(480.0);
        let _ = browser.update(Message::CatalogLoaded(Err("boom".to_string())));
        let _ = browser.update(Message::ResetFilters);
        assert!(matches!(browser.load, LoadState::Failed));

        // a resize still in flight is dropped
        assert!(!browser.resize.is_pending());
        let _ = browser.update(Message::ResizeSettled(pending));
        assert_eq!(browser.width, Config::default().window_width);
    }

    #[test]
    fn test_view_builds_in_every_state() {
        let (mut browser, _) = CatalogBrowser::new(Config::default());
        {
            let _loading: Element<'_, Message> = browser.view();
        }

        let _ = browser.update(Message::CatalogLoaded(Err("boom".to_string())));
        {
            let _failed: Element<'_, Message> = browser.view();
        }

        let browser = ready_browser();
        let _ready: Element<'_, Message> = browser.view();
    }

    #[test]
    fn test_messages_drive_session() {
        let mut browser = ready_browser();
        assert_eq!(shown(&browser), vec!["B", "A"]);

        let _ = browser.update(Message::SortPressed(SortCriterion::PriceAsc));
        assert_eq!(shown(&browser), vec!["A", "B"]);

        let _ = browser.update(Message::CategorySelected(CategoryChoice::Named("X".into())));
        assert_eq!(shown(&browser), vec!["B"]);

        let _ = browser.update(Message::ResetFilters);
        assert_eq!(shown(&browser), vec!["B", "A"]);
    }

    #[test]
    fn test_settled_resize_patches_session() {
        let mut browser = ready_browser();

        let stale = browser.resize.schedule(500.0);
        let settled = browser.resize.schedule(480.0);

        let _ = browser.update(Message::ResizeSettled(stale));
        assert_eq!(browser.width, Config::default().window_width);

        let _ = browser.update(Message::ResizeSettled(settled));
        assert_eq!(browser.width, 480.0);
        match &browser.load {
            LoadState::Ready(session) => assert!(session
                .cards()
                .iter()
                .all(|card| card.variant == crate::ui::viewport::Variant::Mobile)),
            other => panic!("catalog not ready: {:?}", other),
        }
    }

    #[test]
    fn test_resize_before_load_sets_initial_width() {
        let (mut browser, _) = CatalogBrowser::new(Config::default());
        let ticket = browser.resize.schedule(700.0);
        let _ = browser.update(Message::ResizeSettled(ticket));

        let catalog = catalog(vec![product("B", 10.0, 4.0, "X")], &["X"]);
        let _ = browser.update(Message::CatalogLoaded(Ok(Arc::new(catalog))));

        match &browser.load {
            LoadState::Ready(session) => assert_eq!(session.width(), 700.0),
            other => panic!("catalog not ready: {:?}", other),
        }
    }
}
