/// A drawn chart that holds resources until disposed.
pub trait ChartHandle {
    /// Terminal listing of the chart
    fn render(&self) -> String;
    /// Drawing-engine configuration, `None` once disposed
    fn options(&self) -> Option<String>;
    fn dispose(&mut self);
}

/// Owns at most one live chart. The previous chart is always disposed before
/// the next one is built, and whatever is left is disposed on drop.
#[derive(Debug)]
pub struct ChartPanel<C: ChartHandle> {
    name: &'static str,
    chart: Option<C>,
    placeholder: Option<String>,
}

impl<C: ChartHandle> ChartPanel<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            chart: None,
            placeholder: None,
        }
    }

    pub fn redraw<F>(&mut self, build: F) -> &C
    where
        F: FnOnce() -> C,
    {
        self.dispose_current();
        self.placeholder = None;
        self.chart.insert(build())
    }

    pub fn show_placeholder(&mut self, message: &str) {
        self.dispose_current();
        self.placeholder = Some(message.to_string());
    }

    pub fn chart(&self) -> Option<&C> {
        self.chart.as_ref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn render(&self) -> String {
        match (&self.chart, &self.placeholder) {
            (Some(chart), _) => chart.render(),
            (None, Some(message)) => crate::views::placeholder(message),
            (None, None) => String::new(),
        }
    }

    fn dispose_current(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            log::debug!("Disposing previous chart of panel {}", self.name);
            chart.dispose();
        }
    }
}

impl<C: ChartHandle> Drop for ChartPanel<C> {
    fn drop(&mut self) {
        self.dispose_current();
    }
}
