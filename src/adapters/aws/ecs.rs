use std::sync::Arc;

use aws_sdk_ecs::Client;
use aws_sdk_ecs::types::{ContainerDefinition, KeyValuePair};
use tokio::runtime::Runtime;
use tracing::debug;

use super::sdk_error;
use crate::domain::{
    AppError, Cluster, ContainerSpec, RunTaskOutcome, RunTaskRequest, StartedTask,
    TaskDefinition, TaskDefinitionLookup, TaskFailure,
};
use crate::ports::ContainerService;

/// Elastic Container Service clusters, task definitions and tasks.
pub struct EcsContainerService {
    client: Client,
    runtime: Arc<Runtime>,
}

impl EcsContainerService {
    pub fn new(client: Client, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }
}

impl ContainerService for EcsContainerService {
    fn find_clusters(&self, name: &str) -> Result<Vec<Cluster>, AppError> {
        let output = self
            .runtime
            .block_on(self.client.describe_clusters().clusters(name).send())
            .map_err(|e| sdk_error("DescribeClusters", &e))?;

        Ok(output
            .clusters()
            .iter()
            .filter_map(|cluster| {
                Some(Cluster {
                    name: cluster.cluster_name()?.to_string(),
                    arn: cluster.cluster_arn()?.to_string(),
                })
            })
            .collect())
    }

    fn describe_task_definition(&self, family: &str) -> Result<TaskDefinitionLookup, AppError> {
        let result = self
            .runtime
            .block_on(self.client.describe_task_definition().task_definition(family).send());

        match result {
            Ok(output) => match output.task_definition() {
                Some(definition) => Ok(TaskDefinitionLookup::Found(convert_definition(
                    definition,
                    family,
                    "DescribeTaskDefinition",
                )?)),
                None => Ok(TaskDefinitionLookup::NotFound),
            },
            // An unknown family is reported as a client exception.
            Err(e) if e.as_service_error().is_some_and(|err| err.is_client_exception()) => {
                let error = sdk_error("DescribeTaskDefinition", &e);
                debug!(family = %family, error = %error, "No task definition");
                Ok(TaskDefinitionLookup::NotFound)
            }
            Err(e) => Err(sdk_error("DescribeTaskDefinition", &e)),
        }
    }

    fn register_task_definition(
        &self,
        family: &str,
        container: &ContainerSpec,
    ) -> Result<TaskDefinition, AppError> {
        let environment = container
            .environment
            .iter()
            .map(|var| KeyValuePair::builder().name(&var.name).value(&var.value).build())
            .collect::<Vec<_>>();

        let definition = ContainerDefinition::builder()
            .name(&container.name)
            .image(&container.image)
            .cpu(container.cpu_units)
            .memory(container.memory_mib)
            .set_environment(Some(environment))
            .build();

        let output = self
            .runtime
            .block_on(
                self.client
                    .register_task_definition()
                    .family(family)
                    .container_definitions(definition)
                    .send(),
            )
            .map_err(|e| sdk_error("RegisterTaskDefinition", &e))?;

        let registered = output.task_definition().ok_or_else(|| {
            AppError::cloud_api("RegisterTaskDefinition", "response carried no task definition")
        })?;
        convert_definition(registered, family, "RegisterTaskDefinition")
    }

    fn run_task(&self, request: &RunTaskRequest) -> Result<RunTaskOutcome, AppError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .run_task()
                    .task_definition(&request.task_definition_arn)
                    .cluster(&request.cluster_arn)
                    .count(request.count)
                    .send(),
            )
            .map_err(|e| sdk_error("RunTask", &e))?;

        Ok(RunTaskOutcome {
            tasks: output
                .tasks()
                .iter()
                .map(|task| StartedTask { arn: task.task_arn().unwrap_or_default().to_string() })
                .collect(),
            failures: output
                .failures()
                .iter()
                .map(|failure| TaskFailure {
                    arn: failure.arn().map(str::to_string),
                    reason: failure.reason().map(str::to_string),
                })
                .collect(),
        })
    }
}

fn convert_definition(
    definition: &aws_sdk_ecs::types::TaskDefinition,
    family: &str,
    operation: &'static str,
) -> Result<TaskDefinition, AppError> {
    let arn = definition
        .task_definition_arn()
        .ok_or_else(|| AppError::cloud_api(operation, "task definition has no ARN"))?;

    Ok(TaskDefinition {
        family: definition.family().unwrap_or(family).to_string(),
        arn: arn.to_string(),
        revision: definition.revision(),
    })
}
