//! Test doubles for the data client and renderer

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use beacon_client::{ClientError, ClientFactory, DataClient};
use beacon_core::domain::build::{Build, BuildStatus};
use beacon_core::domain::group::job_states;
use beacon_core::domain::job::Job;
use beacon_core::domain::pipeline::{GroupConfig, Pipeline};
use beacon_core::domain::resource::{BuildInputsOutputs, MetadataField, PublicBuildInput};
use chrono::{TimeZone, Utc};

use crate::render::{RenderError, Renderer};
use crate::service::build_page::{BUILD_PARAM, BuildPage, JOB_PARAM, PIPELINE_NAME_PARAM};

pub fn params(pipeline: &str, job: &str, build: &str) -> HashMap<String, String> {
    HashMap::from([
        (PIPELINE_NAME_PARAM.to_string(), pipeline.to_string()),
        (JOB_PARAM.to_string(), job.to_string()),
        (BUILD_PARAM.to_string(), build.to_string()),
    ])
}

/// What a stubbed lookup returns
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Found(T),
    Missing,
    Fail,
}

impl<T: Clone> Outcome<T> {
    fn resolve(&self) -> beacon_client::Result<Option<T>> {
        match self {
            Outcome::Found(value) => Ok(Some(value.clone())),
            Outcome::Missing => Ok(None),
            Outcome::Fail => Err(ClientError::api_error(500, "upstream unavailable")),
        }
    }
}

/// Data client answering from fixed outcomes and recording each call
pub struct StubClient {
    pub job: Outcome<Job>,
    pub build: Outcome<Build>,
    pub resources: Outcome<BuildInputsOutputs>,
    pub builds: Outcome<Vec<Build>>,
    pub pipeline: Outcome<Pipeline>,
    /// How long the job lookup takes before answering
    pub job_delay: Duration,
    calls: Mutex<Vec<&'static str>>,
}

impl StubClient {
    /// Every lookup succeeds with the fixtures behind [`page_fixture`]
    pub fn healthy() -> Self {
        Self {
            job: Outcome::Found(job_fixture()),
            build: Outcome::Found(build_fixture("3", 42, BuildStatus::Succeeded)),
            resources: Outcome::Found(BuildInputsOutputs {
                inputs: inputs_fixture(),
                outputs: vec![],
            }),
            builds: Outcome::Found(history_fixture()),
            pipeline: Outcome::Found(Self::pipeline_fixture()),
            job_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn pipeline_fixture() -> Pipeline {
        Pipeline {
            name: "p1".to_string(),
            url: "/pipelines/p1".to_string(),
            paused: false,
            groups: vec![
                group_fixture("build", &["unit", "lint"]),
                group_fixture("deploy", &["release"]),
            ],
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DataClient for StubClient {
    async fn job(
        &self,
        _pipeline_name: &str,
        _job_name: &str,
    ) -> beacon_client::Result<Option<Job>> {
        self.record("job");
        if !self.job_delay.is_zero() {
            tokio::time::sleep(self.job_delay).await;
        }
        self.job.resolve()
    }

    async fn job_build(
        &self,
        _pipeline_name: &str,
        _job_name: &str,
        _build_name: &str,
    ) -> beacon_client::Result<Option<Build>> {
        self.record("job_build");
        self.build.resolve()
    }

    async fn build_resources(
        &self,
        _build_id: i64,
    ) -> beacon_client::Result<Option<BuildInputsOutputs>> {
        self.record("build_resources");
        self.resources.resolve()
    }

    async fn job_builds(
        &self,
        _pipeline_name: &str,
        _job_name: &str,
    ) -> beacon_client::Result<Option<Vec<Build>>> {
        self.record("job_builds");
        self.builds.resolve()
    }

    async fn pipeline(&self, _pipeline_name: &str) -> beacon_client::Result<Option<Pipeline>> {
        self.record("pipeline");
        self.pipeline.resolve()
    }
}

/// Client factory handing out one shared stub and recording credentials
pub struct StubFactory {
    pub client: Arc<StubClient>,
    authorizations: Mutex<Vec<Option<String>>>,
}

impl StubFactory {
    pub fn new(client: StubClient) -> Self {
        Self {
            client: Arc::new(client),
            authorizations: Mutex::new(Vec::new()),
        }
    }

    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.authorizations.lock().unwrap().clone()
    }
}

impl ClientFactory for StubFactory {
    fn build(&self, authorization: Option<&str>) -> Arc<dyn DataClient> {
        self.authorizations
            .lock()
            .unwrap()
            .push(authorization.map(str::to_string));
        self.client.clone()
    }
}

pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _page: &BuildPage) -> Result<String, RenderError> {
        Err(RenderError::Template("undefined field".to_string()))
    }
}

pub fn page_fixture() -> BuildPage {
    let pipeline = StubClient::pipeline_fixture();
    let job = job_fixture();

    BuildPage {
        group_states: job_states(&pipeline.groups, &job.name),
        job,
        builds: history_fixture(),
        build: build_fixture("3", 42, BuildStatus::Succeeded),
        inputs: inputs_fixture(),
        pipeline_name: "p1".to_string(),
    }
}

fn job_fixture() -> Job {
    Job {
        name: "unit".to_string(),
        pipeline_name: "p1".to_string(),
        url: "/pipelines/p1/jobs/unit".to_string(),
        paused: false,
        disable_manual_trigger: false,
        next_build: None,
        finished_build: Some(build_fixture("3", 42, BuildStatus::Succeeded)),
        inputs: vec![],
        outputs: vec![],
        groups: vec!["build".to_string()],
    }
}

fn build_fixture(name: &str, id: i64, status: BuildStatus) -> Build {
    let start = Utc.timestamp_opt(1_700_000_000 + id * 1000, 0).unwrap();
    Build {
        id,
        name: name.to_string(),
        status,
        job_name: Some("unit".to_string()),
        pipeline_name: Some("p1".to_string()),
        api_url: format!("/api/v1/builds/{}", id),
        start_time: Some(start),
        end_time: Some(start + chrono::Duration::seconds(90)),
    }
}

fn history_fixture() -> Vec<Build> {
    vec![
        build_fixture("3", 42, BuildStatus::Succeeded),
        build_fixture("2", 41, BuildStatus::Failed),
        build_fixture("1", 40, BuildStatus::Succeeded),
    ]
}

fn inputs_fixture() -> Vec<PublicBuildInput> {
    vec![PublicBuildInput {
        name: "src".to_string(),
        resource: "repo".to_string(),
        resource_type: "git".to_string(),
        version: BTreeMap::from([("ref".to_string(), "abc123".to_string())]),
        metadata: vec![MetadataField {
            name: "author".to_string(),
            value: "someone".to_string(),
        }],
        first_occurrence: true,
    }]
}

fn group_fixture(name: &str, jobs: &[&str]) -> GroupConfig {
    GroupConfig {
        name: name.to_string(),
        jobs: jobs.iter().map(|j| j.to_string()).collect(),
        resources: vec![],
    }
}
