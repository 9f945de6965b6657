use crate::domain::{AppError, RunConfiguration};

const FIELDS: &str = "\
The properties of this file are:

\t* clusterName - the name of the ECS cluster to run the task on.
\t* taskName - an identifier for this task. If a task definition with this name has already been
\t\tregistered, it is re-used with its original configuration, useful for instance when the
\t\tdocker image has been updated.
\t* imageName - the name of the ECR image repository, e.g. my-eg/primes.
\t\tThe latest pushed image of this repository is always used.
\t* bucketName - the name of an S3 bucket, within this AWS account, to write any output to.
\t\tIf a bucket with this name doesn't exist, it is created with a 2 day deletion time.
\t* outputFilename - the name of the output, when written to S3.
\t* cpuPercentage - the percentage of a single instance CPU to reserve (0-100).
\t* memoryUsage - the memory in MiB to allocate.
\t* runEnvironment - environment variables to pass to the container, as strings or integers.
\t\tKeys are converted to upper snake case; in this example TAKE_N, TAKE_EVERY_N and
\t\tIGNORE_FIRST_N would be set, along with S3_BUCKET and S3_OUTPUT_KEY.";

/// Usage text embedding a pretty-printed example configuration.
pub fn usage_text() -> Result<String, AppError> {
    let example = serde_json::to_string_pretty(&RunConfiguration::example())
        .map_err(|e| AppError::config_error(format!("Failed to render example config: {}", e)))?;

    Ok(format!(
        "\nrun-ecs takes one argument, the filename of a JSON configuration file, an example of which follows.\n\
         The filename should be relative to the current directory.\n\
         \n\
         For example,\n\
         \n\
         \trun-ecs primes-config.json\n\
         \n\
         A sample JSON configuration might be\n\
         \n\
         {}\n\
         \n\
         {}\n\
         \n\
         \n\
         The output from running this includes a URL to the bucket output, which can be shared\n\
         without need for any AWS credentials.",
        example, FIELDS
    ))
}
