// Chart service - Use case for building a chart from a URL request
use crate::application::signal_source::SignalSource;
use crate::domain::chart::{ChartData, ChartRequest, SeriesData};
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    source: Arc<dyn SignalSource>,
}

impl ChartService {
    pub fn new(source: Arc<dyn SignalSource>) -> Self {
        Self { source }
    }

    /// Build every requested series, in request order, and wrap them with
    /// the presentation settings the renderer needs.
    pub async fn build_chart(&self, request: &ChartRequest) -> ChartData {
        let range = request.range;

        let fetches = request.signals.iter().map(|spec| {
            let source = self.source.clone();
            async move {
                source
                    .historical_series(&spec.id, range.start, range.end)
                    .await
                    .map(|points| SeriesData::new(spec.clone(), points))
            }
        });

        let mut series = Vec::with_capacity(request.signals.len());
        for (spec, result) in request.signals.iter().zip(join_all(fetches).await) {
            match result {
                Ok(data) => series.push(data),
                Err(e) => {
                    tracing::error!("Error building series {}: {}", spec.id, e);
                }
            }
        }

        ChartData {
            title: chart_title(request),
            theme: request.theme,
            mode: request.mode,
            highlight: request.highlight.clone(),
            series,
        }
    }
}

fn chart_title(request: &ChartRequest) -> String {
    if request.signals.is_empty() {
        return "No signals selected".to_string();
    }

    let ids = request.signal_ids().join(", ");
    if request.live {
        format!("Streaming: {}", ids)
    } else {
        format!("Signals: {}", ids)
    }
}
