//! Icon taxonomy for diagram nodes.
//!
//! Each [`Icon`] identifies one category from the provider taxonomy the
//! diagrams draw on (AWS services, client devices, programming frameworks)
//! and carries the node styling the DOT lowering applies for it.

/// Icon category assigned to a diagram node.
///
/// The set is fixed: it covers exactly the component categories that appear
/// in the MFE Demo architecture diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// A group of end users.
    Users,
    /// A single browser/client device.
    Client,
    /// Amazon CloudFront distribution.
    CloudFront,
    /// Amazon S3 bucket or folder.
    S3,
    /// Amazon Cognito user pool.
    Cognito,
    /// A React application or component.
    React,
    /// A TypeScript module or service.
    TypeScript,
}

impl Icon {
    /// Returns the stable category path of this icon.
    pub fn category(self) -> &'static str {
        match self {
            Icon::Users => "onprem.client.users",
            Icon::Client => "onprem.client.client",
            Icon::CloudFront => "aws.network.cloudfront",
            Icon::S3 => "aws.storage.s3",
            Icon::Cognito => "aws.security.cognito",
            Icon::React => "programming.framework.react",
            Icon::TypeScript => "programming.language.typescript",
        }
    }

    /// Node fill color used when rendering this category.
    pub(crate) fn fill_color(self) -> &'static str {
        match self {
            Icon::Users | Icon::Client => "#ECEFF1",
            Icon::CloudFront => "#8C4FFF",
            Icon::S3 => "#7AA116",
            Icon::Cognito => "#DD344C",
            Icon::React => "#61DAFB",
            Icon::TypeScript => "#3178C6",
        }
    }

    /// Label color paired with [`fill_color`](Self::fill_color); light fills
    /// get dark text and dark fills get white text.
    pub(crate) fn font_color(self) -> &'static str {
        match self {
            Icon::Users | Icon::Client | Icon::React => "#263238",
            Icon::CloudFront | Icon::S3 | Icon::Cognito | Icon::TypeScript => "#FFFFFF",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_unique() {
        let all = [
            Icon::Users,
            Icon::Client,
            Icon::CloudFront,
            Icon::S3,
            Icon::Cognito,
            Icon::React,
            Icon::TypeScript,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.category(), b.category());
            }
        }
    }
}
