use std::sync::Mutex;

use crate::domain::{
    AppError, Cluster, ContainerSpec, RunTaskOutcome, RunTaskRequest, StartedTask,
    TaskDefinition, TaskDefinitionLookup,
};
use crate::ports::ContainerService;

/// In-memory container service recording registrations and task runs.
///
/// Run-task reports one started task unless another outcome is configured.
pub struct FakeContainerService {
    clusters: Vec<Cluster>,
    definition: Mutex<Option<TaskDefinition>>,
    describe_failure: Option<String>,
    run_outcome: Option<RunTaskOutcome>,
    registered: Mutex<Vec<(String, ContainerSpec)>>,
    runs: Mutex<Vec<RunTaskRequest>>,
}

impl FakeContainerService {
    pub fn with_clusters(clusters: Vec<Cluster>) -> Self {
        Self {
            clusters,
            definition: Mutex::new(None),
            describe_failure: None,
            run_outcome: None,
            registered: Mutex::new(Vec::new()),
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_definition(self, definition: TaskDefinition) -> Self {
        *self.definition.lock().unwrap() = Some(definition);
        self
    }

    pub fn failing_describe(mut self, message: impl Into<String>) -> Self {
        self.describe_failure = Some(message.into());
        self
    }

    pub fn with_run_outcome(mut self, outcome: RunTaskOutcome) -> Self {
        self.run_outcome = Some(outcome);
        self
    }

    pub fn registered(&self) -> Vec<(String, ContainerSpec)> {
        self.registered.lock().unwrap().clone()
    }

    pub fn runs(&self) -> Vec<RunTaskRequest> {
        self.runs.lock().unwrap().clone()
    }
}

impl ContainerService for FakeContainerService {
    fn find_clusters(&self, name: &str) -> Result<Vec<Cluster>, AppError> {
        Ok(self.clusters.iter().filter(|cluster| cluster.name == name).cloned().collect())
    }

    fn describe_task_definition(&self, family: &str) -> Result<TaskDefinitionLookup, AppError> {
        if let Some(message) = &self.describe_failure {
            return Err(AppError::cloud_api("DescribeTaskDefinition", message.clone()));
        }
        match self.definition.lock().unwrap().as_ref() {
            Some(definition) if definition.family == family => {
                Ok(TaskDefinitionLookup::Found(definition.clone()))
            }
            _ => Ok(TaskDefinitionLookup::NotFound),
        }
    }

    fn register_task_definition(
        &self,
        family: &str,
        container: &ContainerSpec,
    ) -> Result<TaskDefinition, AppError> {
        let mut registered = self.registered.lock().unwrap();
        registered.push((family.to_string(), container.clone()));

        let revision = registered.len() as i32;
        let definition = TaskDefinition {
            family: family.to_string(),
            arn: format!("arn:aws:ecs:eu-west-1:123:task-definition/{}:{}", family, revision),
            revision,
        };
        *self.definition.lock().unwrap() = Some(definition.clone());
        Ok(definition)
    }

    fn run_task(&self, request: &RunTaskRequest) -> Result<RunTaskOutcome, AppError> {
        self.runs.lock().unwrap().push(request.clone());
        Ok(self.run_outcome.clone().unwrap_or_else(|| RunTaskOutcome {
            tasks: vec![StartedTask {
                arn: format!("{}/task/0123456789abcdef", request.cluster_arn),
            }],
            failures: vec![],
        }))
    }
}
