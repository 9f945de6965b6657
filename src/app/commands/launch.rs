//! Launch a configured task: resolve image and cluster, resolve or register the
//! task definition, ensure the output bucket, start the task and share a link
//! to its output.

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::retention::LINK_LIFETIME_HOURS;
use crate::domain::{
    AppError, Cluster, ContainerSpec, ExpirationRule, OutputLink, RunConfiguration,
    RunTaskRequest, StartedTask, TaskDefinition, TaskDefinitionLookup,
};
use crate::ports::{Clock, ContainerRegistry, ContainerService, ObjectStorage};

/// Result of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub image_uri: String,
    pub cluster: Cluster,
    pub task_definition: TaskDefinition,
    /// Whether the task definition was registered by this launch.
    pub registered_definition: bool,
    /// Whether the output bucket was created by this launch.
    pub created_bucket: bool,
    pub task: StartedTask,
    pub output: OutputLink,
}

/// Execute the launch sequence. The first failing step aborts the launch.
pub fn execute<R, S, O, C>(
    ctx: &AppContext<R, S, O, C>,
    config: &RunConfiguration,
) -> Result<LaunchReport, AppError>
where
    R: ContainerRegistry,
    S: ContainerService,
    O: ObjectStorage,
    C: Clock,
{
    let image_uri = resolve_image_uri(ctx.registry(), &config.image_name)?;
    info!(image = %config.image_name, uri = %image_uri, "Resolved image repository");

    let cluster = resolve_cluster(ctx.containers(), &config.cluster_name)?;
    info!(cluster = %cluster.name, arn = %cluster.arn, "Resolved cluster");

    let (task_definition, registered_definition) =
        resolve_task_definition(ctx.containers(), config, &image_uri)?;

    let created_bucket = ensure_output_bucket(ctx.storage(), ctx.clock(), &config.bucket_name)?;

    let task = launch_task(ctx.containers(), &cluster, &task_definition)?;
    info!(task = %task.arn, "Started task");

    let output = share_output(ctx.storage(), ctx.clock(), config)?;

    Ok(LaunchReport {
        image_uri,
        cluster,
        task_definition,
        registered_definition,
        created_bucket,
        task,
        output,
    })
}

fn resolve_image_uri<R: ContainerRegistry>(
    registry: &R,
    image_name: &str,
) -> Result<String, AppError> {
    let repositories = registry.find_repositories(image_name).map_err(|e| {
        debug!(image = %image_name, error = %e, "Repository lookup failed");
        AppError::RepositoryNotFound(image_name.to_string())
    })?;

    match <[_; 1]>::try_from(repositories) {
        Ok([repository]) => Ok(repository.uri),
        Err(found) => {
            debug!(image = %image_name, matches = found.len(), "Expected exactly one repository");
            Err(AppError::RepositoryNotFound(image_name.to_string()))
        }
    }
}

fn resolve_cluster<S: ContainerService>(
    containers: &S,
    cluster_name: &str,
) -> Result<Cluster, AppError> {
    let clusters = containers.find_clusters(cluster_name)?;

    match <[_; 1]>::try_from(clusters) {
        Ok([cluster]) => Ok(cluster),
        Err(found) => {
            debug!(cluster = %cluster_name, matches = found.len(), "Expected exactly one cluster");
            Err(AppError::ClusterNotFound(cluster_name.to_string()))
        }
    }
}

/// Reuse the family's current definition as-is, registering one only when the
/// family does not exist yet.
fn resolve_task_definition<S: ContainerService>(
    containers: &S,
    config: &RunConfiguration,
    image_uri: &str,
) -> Result<(TaskDefinition, bool), AppError> {
    match containers.describe_task_definition(&config.task_name)? {
        TaskDefinitionLookup::Found(definition) => {
            info!(definition = %definition, "Reusing existing task definition");
            Ok((definition, false))
        }
        TaskDefinitionLookup::NotFound => {
            let container = ContainerSpec::for_task(config, image_uri)?;
            let definition = containers.register_task_definition(&config.task_name, &container)?;
            info!(
                definition = %definition,
                cpu = container.cpu_units,
                memory = container.memory_mib,
                "Registered task definition"
            );
            Ok((definition, true))
        }
    }
}

/// Returns `true` when the bucket was created.
fn ensure_output_bucket<O: ObjectStorage, C: Clock>(
    storage: &O,
    clock: &C,
    bucket: &str,
) -> Result<bool, AppError> {
    if storage.bucket_exists(bucket)? {
        info!(bucket = %bucket, "Using existing output bucket");
        return Ok(false);
    }

    storage.create_bucket(bucket)?;
    let rule = ExpirationRule::for_bucket_created_at(clock.now());
    storage.put_expiration_rule(bucket, &rule)?;
    info!(bucket = %bucket, expires_at = %rule.expires_at, "Created output bucket");
    Ok(true)
}

fn launch_task<S: ContainerService>(
    containers: &S,
    cluster: &Cluster,
    definition: &TaskDefinition,
) -> Result<StartedTask, AppError> {
    let request = RunTaskRequest {
        task_definition_arn: definition.arn.clone(),
        cluster_arn: cluster.arn.clone(),
        count: 1,
    };
    let outcome = containers.run_task(&request)?;

    let started = outcome.tasks.len();
    match <[_; 1]>::try_from(outcome.tasks) {
        Ok([task]) => Ok(task),
        Err(_) => Err(AppError::TaskNotStarted {
            task_definition: definition.to_string(),
            cluster: cluster.arn.clone(),
            started,
            failures: outcome
                .failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }),
    }
}

fn share_output<O: ObjectStorage, C: Clock>(
    storage: &O,
    clock: &C,
    config: &RunConfiguration,
) -> Result<OutputLink, AppError> {
    let lifetime = ChronoDuration::hours(LINK_LIFETIME_HOURS);
    let expires_in = Duration::from_secs(lifetime.num_seconds().unsigned_abs());
    let expires_at = clock.now() + lifetime;

    let url = storage.presign_get(&config.bucket_name, &config.output_filename, expires_in)?;
    Ok(OutputLink { url, expires_at })
}
