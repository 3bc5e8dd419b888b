//! Client side of the simulation service contract.

use crate::config::{API_BASE, INITIAL_DATA_PATH, REQUEST_TIMEOUT_MS, UPDATE_DATA_PATH};
use crate::error::PipelineError;
use crate::params::ParameterRecord;
use crate::series::SimulationSeries;
use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use std::future::Future;
use std::pin::pin;

/// The remote simulation, reached over HTTP in production.
pub trait SimulationBackend {
    /// `GET /initial_data`
    fn initial_data(&self) -> LocalBoxFuture<'_, Result<SimulationSeries, PipelineError>>;

    /// `POST /update_data` with the record as the JSON body.
    fn update_data(
        &self,
        params: ParameterRecord,
    ) -> LocalBoxFuture<'_, Result<SimulationSeries, PipelineError>>;
}

/// Race `request` against `deadline`; the deadline winning is a timeout.
pub async fn with_timeout<T, F, D>(request: F, deadline: D, timeout_ms: u32) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T, PipelineError>>,
    D: Future<Output = ()>,
{
    match future::select(pin!(request), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(PipelineError::Timeout(timeout_ms)),
    }
}

fn transport(e: gloo_net::Error) -> PipelineError {
    PipelineError::Transport(e.to_string())
}

async fn read_series(response: Response) -> Result<SimulationSeries, PipelineError> {
    if !response.ok() {
        return Err(PipelineError::Status(response.status()));
    }
    let body = response.text().await.map_err(transport)?;
    Ok(SimulationSeries::from_json(&body)?)
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
    timeout_ms: u32,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(API_BASE, REQUEST_TIMEOUT_MS)
    }
}

impl HttpBackend {
    pub fn new(base: impl Into<String>, timeout_ms: u32) -> Self {
        Self { base: base.into(), timeout_ms }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn guarded<'a>(
        &self,
        url: String,
        request: impl Future<Output = Result<SimulationSeries, PipelineError>> + 'a,
    ) -> LocalBoxFuture<'a, Result<SimulationSeries, PipelineError>> {
        let timeout_ms = self.timeout_ms;
        let started = js_sys::Date::now();
        async move {
            let result = with_timeout(request, TimeoutFuture::new(timeout_ms), timeout_ms).await;
            debug!(
                "{} finished in {:.0} ms (ok: {})",
                url,
                js_sys::Date::now() - started,
                result.is_ok()
            );
            result
        }
        .boxed_local()
    }
}

impl SimulationBackend for HttpBackend {
    fn initial_data(&self) -> LocalBoxFuture<'_, Result<SimulationSeries, PipelineError>> {
        let url = self.url(INITIAL_DATA_PATH);
        let request = {
            let url = url.clone();
            async move {
                let response = Request::get(&url).send().await.map_err(transport)?;
                read_series(response).await
            }
        };
        self.guarded(url, request)
    }

    fn update_data(
        &self,
        params: ParameterRecord,
    ) -> LocalBoxFuture<'_, Result<SimulationSeries, PipelineError>> {
        let url = self.url(UPDATE_DATA_PATH);
        let request = {
            let url = url.clone();
            async move {
                let response = Request::post(&url)
                    .json(&params)
                    .map_err(transport)?
                    .send()
                    .await
                    .map_err(transport)?;
                read_series(response).await
            }
        };
        self.guarded(url, request)
    }
}
