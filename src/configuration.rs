//! Defines the connector configuration of a data source and its
//! mapping to and from the Kendra types. Only the S3 connector is
//! modeled.

use aws_sdk_kendra::types as kendra;
use serde::{Deserialize, Serialize};

/// The `DataSourceConfiguration` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_configuration: Option<S3DataSourceConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSourceConfiguration {
    pub bucket_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion_prefixes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_metadata_configuration: Option<DocumentsMetadataConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control_list_configuration: Option<AccessControlListConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentsMetadataConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessControlListConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
}

/// Builds the configuration sent with `UpdateDataSource`.
pub fn to_sdk(configuration: &DataSourceConfiguration) -> kendra::DataSourceConfiguration {
    kendra::DataSourceConfiguration::builder()
        .set_s3_configuration(configuration.s3_configuration.as_ref().map(|s3| {
            kendra::S3DataSourceConfiguration::builder()
                .bucket_name(&s3.bucket_name)
                .set_inclusion_prefixes(s3.inclusion_prefixes.clone())
                .set_inclusion_patterns(s3.inclusion_patterns.clone())
                .set_exclusion_patterns(s3.exclusion_patterns.clone())
                .set_documents_metadata_configuration(
                    s3.documents_metadata_configuration.as_ref().map(|m| {
                        kendra::DocumentsMetadataConfiguration::builder()
                            .set_s3_prefix(m.s3_prefix.clone())
                            .build()
                    }),
                )
                .set_access_control_list_configuration(
                    s3.access_control_list_configuration.as_ref().map(|acl| {
                        kendra::AccessControlListConfiguration::builder()
                            .set_key_path(acl.key_path.clone())
                            .build()
                    }),
                )
                .build()
        }))
        .build()
}

/// Builds the configuration reported by `DescribeDataSource`.
pub fn from_sdk(configuration: &kendra::DataSourceConfiguration) -> DataSourceConfiguration {
    DataSourceConfiguration {
        s3_configuration: configuration
            .s3_configuration()
            .map(|s3| S3DataSourceConfiguration {
                bucket_name: s3.bucket_name().map(String::from).unwrap_or_default(),
                inclusion_prefixes: s3.inclusion_prefixes().map(<[String]>::to_vec),
                inclusion_patterns: s3.inclusion_patterns().map(<[String]>::to_vec),
                exclusion_patterns: s3.exclusion_patterns().map(<[String]>::to_vec),
                documents_metadata_configuration: s3.documents_metadata_configuration().map(
                    |m| DocumentsMetadataConfiguration {
                        s3_prefix: m.s3_prefix().map(String::from),
                    },
                ),
                access_control_list_configuration: s3.access_control_list_configuration().map(
                    |acl| AccessControlListConfiguration {
                        key_path: acl.key_path().map(String::from),
                    },
                ),
            }),
    }
}
