//! Common test utilities for provdocs-core
//!
//! Builds throwaway repository checkouts with provider.yaml files laid out
//! the way the loader expects them.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use provdocs_core::Settings;
use tempfile::TempDir;

pub const AMAZON_PROVIDER: &str = r#"
package-name: apache-airflow-providers-amazon
name: Amazon
integrations:
  - integration-name: Amazon S3
    external-doc-url: https://aws.amazon.com/s3/
    how-to-guide:
      - /docs/apache-airflow-providers-amazon/operators/s3.rst
    tags: [aws]
  - integration-name: AWS Lambda
    external-doc-url: https://aws.amazon.com/lambda/
    how-to-guide:
      - /docs/apache-airflow-providers-amazon/operators/lambda.rst
    tags: [aws]
  - integration-name: Amazon Athena
    external-doc-url: https://aws.amazon.com/athena/
    tags: [aws]
operators:
  - integration-name: Amazon S3
    python-modules:
      - airflow.providers.amazon.aws.operators.s3
  - integration-name: AWS Lambda
    python-modules:
      - airflow.providers.amazon.aws.operators.lambda_function
hooks:
  - integration-name: Amazon S3
    python-modules:
      - airflow.providers.amazon.aws.hooks.s3
transfers:
  - source-integration-name: Amazon S3
    target-integration-name: SQL
    python-module: airflow.providers.amazon.aws.transfers.s3_to_sql
logging:
  - airflow.providers.amazon.aws.log.s3_task_handler.S3TaskHandler
secrets-backends:
  - airflow.providers.amazon.aws.secrets.secrets_manager.SecretsManagerBackend
connection-types:
  - connection-type: aws
    hook-class-name: airflow.providers.amazon.aws.hooks.base_aws.AwsGenericHook
extra-links:
  - airflow.providers.amazon.aws.links.emr.EmrClusterLink
"#;

pub const GOOGLE_PROVIDER: &str = r#"
package-name: apache-airflow-providers-google
name: Google
integrations:
  - integration-name: Google Cloud Storage (GCS)
    external-doc-url: https://cloud.google.com/gcs/
    how-to-guide:
      - /docs/apache-airflow-providers-google/operators/cloud/gcs.rst
    tags: [gcp]
operators:
  - integration-name: Google Cloud Storage (GCS)
    python-modules:
      - airflow.providers.google.cloud.operators.gcs
hooks:
  - integration-name: Google Cloud Storage (GCS)
    python-modules:
      - airflow.providers.google.cloud.hooks.gcs
transfers:
  - source-integration-name: Amazon S3
    target-integration-name: Google Cloud Storage (GCS)
    how-to-guide: /docs/apache-airflow-providers-google/operators/transfer/s3_to_gcs.rst
    python-module: airflow.providers.google.cloud.transfers.s3_to_gcs
auth-backends:
  - airflow.providers.google.common.auth_backend.google_openid
connection-types:
  - connection-type: google_cloud_platform
    hook-class-name: airflow.providers.google.common.hooks.base_google.GoogleBaseHook
"#;

pub const SUSPENDED_PROVIDER: &str = r#"
package-name: apache-airflow-providers-qubole
name: Qubole
suspended: true
integrations:
  - integration-name: Qubole
    external-doc-url: https://www.qubole.com/
    tags: [service]
operators:
  - integration-name: Qubole
    python-modules:
      - airflow.providers.qubole.operators.qubole
logging:
  - airflow.providers.qubole.log.QuboleTaskHandler
"#;

/// Temporary repository checkout
pub struct ProviderRepo {
    _temp_dir: TempDir,
    root: Utf8PathBuf,
}

impl ProviderRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .expect("Temp directory is not valid UTF-8");
        std::fs::create_dir_all(root.join("airflow/providers"))
            .expect("Failed to create providers directory");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Repository with the Amazon and Google providers
    pub fn with_default_providers() -> Self {
        let repo = Self::new();
        repo.write_provider("amazon", AMAZON_PROVIDER);
        repo.write_provider("google", GOOGLE_PROVIDER);
        repo
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `airflow/providers/<dir>/provider.yaml`
    pub fn write_provider(&self, dir: &str, yaml: &str) -> Utf8PathBuf {
        let provider_dir = self.root.join("airflow/providers").join(dir);
        std::fs::create_dir_all(&provider_dir).expect("Failed to create provider directory");
        let path = provider_dir.join("provider.yaml");
        std::fs::write(&path, yaml).expect("Failed to write provider.yaml");
        path
    }

    pub fn write_file(&self, relative: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn settings(&self) -> Settings {
        Settings::with_root(self.root.clone())
    }
}

/// Minimal valid provider with one integration carrying an operator
pub fn provider_yaml(package: &str, integration: &str, tags: &[&str], module: &str) -> String {
    format!(
        r#"
package-name: {package}
name: {package}
integrations:
  - integration-name: "{integration}"
    external-doc-url: https://example.com/{package}
    tags: [{tags}]
operators:
  - integration-name: "{integration}"
    python-modules:
      - {module}
"#,
        package = package,
        integration = integration,
        tags = tags.join(", "),
        module = module,
    )
}
