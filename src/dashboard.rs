use std::future::Future;
use std::sync::Arc;

use crate::{
    clients::actor_api_client::ActorApiClient,
    command::{Cli, Command},
    config::Config,
    error::{ApiError, Result},
    model::{actor::ActorDetails, charts_response::ChartsResponse},
    panels::{
        chart_panel::{ChartHandle, ChartPanel},
        selection::{SelectionToken, SelectionTracker},
    },
    persisters::{
        csv_writer::{file_slug, CsvWriter},
        html_writer::{HtmlWriter, PageChart},
    },
    projectors::chart_data_projector::ChartDataProjector,
    views::{actor_view, chart_view::ActorChart, placeholder},
};

pub const NO_POPULAR_ACTORS: &str = "No popular actors found";
pub const POPULAR_ACTORS_FAILED: &str = "Error loading popular actors";
pub const NO_ACTORS_FOUND: &str = "No actors found";
pub const SEARCH_FAILED: &str = "Search failed";
pub const LOADING_ACTOR: &str = "Loading actor analysis...";
pub const ACTOR_DETAILS_FAILED: &str = "Failed to load actor details";
pub const COMPARISON_FAILED: &str = "Failed to load comparison";
pub const NO_RATING_DATA: &str = "No rating data available";
pub const NO_BOX_OFFICE_DATA: &str = "No box office data available";

/// Outcome of fetching everything an actor selection needs.
#[derive(Debug)]
pub struct ActorSelection {
    pub token: SelectionToken,
    pub actor_name: String,
    pub details: Result<ActorDetails>,
    pub charts: Result<ChartsResponse>,
}

/// One client session: owns the chart panels and decides what each fetch
/// outcome looks like on screen. Every error ends up as a placeholder.
pub struct Dashboard {
    client: Arc<ActorApiClient>,
    config: Config,
    selection: SelectionTracker,
    rating_panel: ChartPanel<ActorChart>,
    box_office_panel: ChartPanel<ActorChart>,
}

impl Dashboard {
    pub fn new(config: Config) -> Result<Self> {
        let client = ActorApiClient::new(&config)?;
        Ok(Dashboard::with_client(config, client))
    }

    pub fn with_client(config: Config, client: ActorApiClient) -> Self {
        Self {
            client: Arc::new(client),
            config,
            selection: SelectionTracker::new(),
            rating_panel: ChartPanel::new("rating"),
            box_office_panel: ChartPanel::new("box office"),
        }
    }

    pub async fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Popular => self.load_popular().await,
            Command::Search { query } => self
                .search(&Command::text(&query))
                .await
                .unwrap_or_else(Cli::usage),
            Command::Actor { name } => self.select_actor(Command::text(&name)).await,
            Command::Compare { names } => self.compare(&names).await,
            Command::Quit => String::new(),
        }
    }

    pub async fn load_popular(&self) -> String {
        match self.client.get_popular_actors().await {
            Ok(actors) if actors.is_empty() => placeholder(NO_POPULAR_ACTORS),
            Ok(actors) => actor_view::render_popular_actors(&actors),
            Err(e) => {
                log::error!("Error loading popular actors: {}", e);
                placeholder(POPULAR_ACTORS_FAILED)
            }
        }
    }

    /// `None` for a blank query, which is not sent at all.
    pub async fn search(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let panel = match self.client.search_actors(query).await {
            Ok(results) if results.is_empty() => placeholder(NO_ACTORS_FOUND),
            Ok(results) => actor_view::render_search_results(&results),
            Err(ApiError::Application(message)) => placeholder(&message),
            Err(e) => {
                log::error!("Error searching actors: {}", e);
                placeholder(SEARCH_FAILED)
            }
        };
        Some(panel)
    }

    pub async fn select_actor(&mut self, actor_name: String) -> String {
        let selection = self.start_selection(actor_name).await;
        self.show_selection(selection)
            .unwrap_or_else(|| placeholder(LOADING_ACTOR))
    }

    /// Takes a new selection token and returns the fetch for it. The future
    /// owns everything it needs, so it can be spawned.
    pub fn start_selection(
        &self,
        actor_name: String,
    ) -> impl Future<Output = ActorSelection> + Send + 'static {
        let token = self.selection.begin();
        let client = self.client.clone();
        log::info!("Selecting actor {}", actor_name);

        async move {
            let (details, charts) = tokio::join!(
                client.get_actor_details(&actor_name),
                client.get_charts_data(&actor_name)
            );
            ActorSelection {
                token,
                actor_name,
                details,
                charts,
            }
        }
    }

    /// Renders the detail and chart panels, or `None` when a newer selection
    /// has started since this one.
    pub fn show_selection(&mut self, selection: ActorSelection) -> Option<String> {
        if !self.selection.is_current(selection.token) {
            log::debug!(
                "Dropping superseded response for actor {}",
                selection.actor_name
            );
            return None;
        }

        let details = match selection.details {
            Ok(details) => details,
            Err(ApiError::Application(message)) => return Some(placeholder(&message)),
            Err(e) => {
                log::error!("Error loading actor details: {}", e);
                return Some(placeholder(ACTOR_DETAILS_FAILED));
            }
        };

        match &selection.charts {
            Ok(charts) => self.draw_charts(&selection.actor_name, charts),
            Err(e) => {
                log::error!("Charts data error: {}", e);
                self.rating_panel.show_placeholder(NO_RATING_DATA);
                self.box_office_panel.show_placeholder(NO_BOX_OFFICE_DATA);
            }
        }

        let mut out = actor_view::render_actor_details(&details);
        out.push_str("\nCareer Visualization\n");
        out.push_str(&self.rating_panel.render());
        out.push('\n');
        out.push_str(&self.box_office_panel.render());
        Some(out)
    }

    pub async fn compare(&self, actor_names: &[String]) -> String {
        match self.client.compare_actors(actor_names).await {
            Ok(comparison) => actor_view::render_comparison(&comparison),
            Err(ApiError::Application(message)) => placeholder(&message),
            Err(e) => {
                log::error!("Error comparing actors: {}", e);
                placeholder(COMPARISON_FAILED)
            }
        }
    }

    pub fn rating_panel(&self) -> &ChartPanel<ActorChart> {
        &self.rating_panel
    }

    pub fn box_office_panel(&self) -> &ChartPanel<ActorChart> {
        &self.box_office_panel
    }

    fn draw_charts(&mut self, actor_name: &str, charts: &ChartsResponse) {
        let ratings = ChartDataProjector::build_rating_series(charts);
        if ratings.is_empty() {
            self.rating_panel.show_placeholder(NO_RATING_DATA);
        } else {
            self.rating_panel
                .redraw(|| ActorChart::rating_progression(&ratings));
        }

        let box_office = ChartDataProjector::build_box_office_series_top(charts, self.config.top_n);
        if box_office.is_empty() {
            self.box_office_panel.show_placeholder(NO_BOX_OFFICE_DATA);
        } else {
            self.box_office_panel
                .redraw(|| ActorChart::box_office_ranking(&box_office));
        }

        if let Some(dir) = &self.config.export_dir {
            match CsvWriter::export_series(dir, actor_name, &ratings, &box_office) {
                Ok((ratings_path, box_office_path)) => log::info!(
                    "Saved chart series for {}: {}, {}",
                    actor_name,
                    ratings_path.display(),
                    box_office_path.display()
                ),
                Err(e) => log::error!("Error when exporting chart series: {}", e),
            }

            let page_path = dir.join(format!("{}_charts.html", file_slug(actor_name)));
            match HtmlWriter::save_charts_page(actor_name, &self.page_charts(), &page_path) {
                Ok(()) => log::info!("Saved charts page {}", page_path.display()),
                Err(e) => log::error!("Error when saving charts page: {}", e),
            }
        }
    }

    fn page_charts(&self) -> Vec<PageChart<'static>> {
        [&self.rating_panel, &self.box_office_panel]
            .into_iter()
            .filter_map(|panel| {
                let chart = panel.chart()?;
                Some(PageChart {
                    id: chart.id(),
                    options: chart.options()?,
                })
            })
            .collect()
    }
}
