//! The four fixed architecture diagrams of the MFE Demo project.
//!
//! Each constructor builds one [`DiagramSpec`]; [`all`] returns them in
//! generation order. Content is static: the diagrams document the project's
//! topology and are regenerated only when that topology changes.

use crate::{
    graph::{DiagramSpec, Direction},
    icon::Icon,
};

/// Returns the four diagrams in generation order.
pub fn all() -> Vec<DiagramSpec> {
    vec![
        mfe_architecture(),
        deployment_architecture(),
        component_architecture(),
        data_flow(),
    ]
}

/// High-level MFE architecture: end users through the CDN into the
/// container application, which authenticates and dispatches to each MFE.
pub fn mfe_architecture() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "MFE Demo Architecture",
        "mfe-architecture",
        Direction::TopToBottom,
    );

    let users = spec.node(Icon::Users, "End Users");

    let aws = spec.cluster("AWS Cloud");
    let cdn = spec.node_in(Icon::CloudFront, "CloudFront CDN", aws);
    let cognito = spec.node_in(Icon::Cognito, "Cognito Auth", aws);

    let bucket = spec.cluster_in("S3 Bucket (app.mfeworld.com)", aws);
    let container_cluster = spec.cluster_in("Container Application", bucket);
    let container = spec.node_in(
        Icon::React,
        "Container\n(Port 4000)\n- Header/Navbar\n- Auth Context\n- Router",
        container_cluster,
    );

    let mfes = spec.cluster_in("Micro Frontends", bucket);
    let home = spec.node_in(Icon::React, "Home MFE\n(Port 3001)", mfes);
    let preferences = spec.node_in(Icon::React, "Preferences MFE\n(Port 3002)", mfes);
    let account = spec.node_in(Icon::React, "Account MFE\n(Port 3003)", mfes);
    let admin = spec.node_in(Icon::React, "Admin MFE\n(Port 3004)", mfes);

    spec.edge(users, cdn);
    spec.edge(cdn, container);
    spec.edge(container, cognito);
    spec.edges_to_all(container, &[home, preferences, account, admin]);

    spec
}

/// AWS deployment topology: browser to CDN to static hosting, with the
/// authentication flow as a parallel path.
pub fn deployment_architecture() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "AWS Deployment Architecture",
        "deployment-architecture",
        Direction::LeftToRight,
    );

    let client = spec.cluster("Client");
    let browser = spec.node_in(Icon::Client, "Browser", client);

    let aws = spec.cluster("AWS Cloud");
    let cdn = spec.node_in(Icon::CloudFront, "CloudFront\nCDN", aws);

    let auth = spec.cluster_in("Authentication", aws);
    let cognito = spec.node_in(Icon::Cognito, "Cognito\nUser Pool", auth);

    let hosting = spec.cluster_in("Static Hosting", aws);
    let s3 = spec.node_in(Icon::S3, "S3 Bucket", hosting);

    let folders = spec.cluster_in("Application Folders", hosting);
    for folder in ["container/", "home/", "preferences/", "account/", "admin/"] {
        spec.node_in(Icon::S3, folder, folders);
    }

    spec.edge(browser, cdn);
    spec.edge(cdn, s3);
    spec.edge(browser, cognito);

    spec
}

/// Internal composition of the container application: configuration,
/// context providers, core components, services, shared packages, and the
/// dependent MFEs.
pub fn component_architecture() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "Container Application Components",
        "component-architecture",
        Direction::TopToBottom,
    );

    let container = spec.cluster("Container App (apps/container)");

    let configuration = spec.cluster_in("Configuration Layer", container);
    let mfe_registry = spec.node_in(Icon::TypeScript, "mfeRegistry.ts", configuration);
    spec.node_in(Icon::TypeScript, "routeMappings.ts", configuration);
    spec.node_in(Icon::TypeScript, "theme.ts", configuration);

    let contexts = spec.cluster_in("Context Providers", container);
    let auth_context = spec.node_in(Icon::React, "AuthContext", contexts);
    spec.node_in(Icon::React, "DataContext", contexts);
    spec.node_in(Icon::React, "UserPreferencesContext", contexts);

    let components = spec.cluster_in("Core Components", container);
    let header = spec.node_in(Icon::React, "Header", components);
    let navbar = spec.node_in(Icon::React, "Navbar", components);
    let mfe_loader = spec.node_in(Icon::React, "MFELoader", components);
    spec.node_in(Icon::React, "ErrorBoundary", components);

    let services = spec.cluster_in("Services Layer", container);
    spec.node_in(Icon::TypeScript, "authService", services);
    spec.node_in(Icon::TypeScript, "storageService", services);
    spec.node_in(Icon::TypeScript, "eventBus", services);

    let shared = spec.cluster("Shared Packages");
    spec.node_in(Icon::TypeScript, "packages/shared-hooks", shared);

    let mfes = spec.cluster("Micro Frontends");
    let home = spec.node_in(Icon::React, "Home MFE", mfes);
    let preferences = spec.node_in(Icon::React, "Preferences MFE", mfes);
    let account = spec.node_in(Icon::React, "Account MFE", mfes);
    let admin = spec.node_in(Icon::React, "Admin MFE", mfes);

    spec.edge(mfe_registry, mfe_loader);
    spec.edge(auth_context, header);
    spec.edge(auth_context, navbar);
    spec.edges_to_all(mfe_loader, &[home, preferences, account, admin]);

    spec
}

/// Runtime data flow: browser through the router into the MFEs, the auth
/// context against Cognito, and events flowing back through the event bus.
pub fn data_flow() -> DiagramSpec {
    let mut spec = DiagramSpec::new("MFE Data Flow", "data-flow", Direction::LeftToRight);

    let ui = spec.cluster("User Interface");
    let browser = spec.node_in(Icon::Client, "Browser", ui);

    let container = spec.cluster("Container Application");

    let routing = spec.cluster_in("Routing", container);
    let router = spec.node_in(Icon::React, "React Router", routing);

    let state = spec.cluster_in("State Management", container);
    let auth_context = spec.node_in(Icon::React, "AuthContext", state);
    spec.node_in(Icon::React, "DataContext", state);

    let communication = spec.cluster_in("Communication", container);
    let event_bus = spec.node_in(Icon::TypeScript, "EventBus", communication);
    spec.node_in(Icon::TypeScript, "LocalStorage", communication);

    let auth = spec.cluster("Authentication");
    let cognito = spec.node_in(Icon::Cognito, "AWS Cognito", auth);

    let mfes_cluster = spec.cluster("Micro Frontends");
    let mfes = spec.node_in(
        Icon::React,
        "MFEs\n(Home, Account,\nPreferences, Admin)",
        mfes_cluster,
    );

    spec.edge(browser, router);
    spec.edge(router, mfes);
    spec.edge(auth_context, cognito);
    spec.edge(mfes, event_bus);
    spec.edge(event_bus, auth_context);

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_diagrams_with_stable_slugs() {
        let diagrams = all();
        let slugs: Vec<_> = diagrams.iter().map(|d| d.slug().to_string()).collect();
        assert_eq!(
            slugs,
            [
                "mfe-architecture",
                "deployment-architecture",
                "component-architecture",
                "data-flow",
            ]
        );
    }

    #[test]
    fn mfe_architecture_shape() {
        let spec = mfe_architecture();
        // One entry point, one CDN, one auth node, one container, four MFEs.
        assert_eq!(spec.node_count(), 8);
        // users->cdn, cdn->container, container->cognito, container->4 MFEs.
        assert_eq!(spec.edge_count(), 7);
        assert_eq!(spec.cluster_count(), 4);
        assert_eq!(spec.direction(), Direction::TopToBottom);
        assert_eq!(spec.title(), "MFE Demo Architecture");
    }

    #[test]
    fn deployment_architecture_shape() {
        let spec = deployment_architecture();
        // Browser, CDN, Cognito, bucket, and five application folders.
        assert_eq!(spec.node_count(), 9);
        // Two parallel flows: browser->cdn->s3 and browser->cognito.
        assert_eq!(spec.edge_count(), 3);
        assert_eq!(spec.cluster_count(), 5);
        assert_eq!(spec.direction(), Direction::LeftToRight);
    }

    #[test]
    fn component_architecture_shape() {
        let spec = component_architecture();
        assert_eq!(spec.node_count(), 18);
        // registry->loader, auth->header, auth->navbar, loader->4 MFEs.
        assert_eq!(spec.edge_count(), 7);
        assert_eq!(spec.cluster_count(), 7);
    }

    #[test]
    fn data_flow_shape() {
        let spec = data_flow();
        assert_eq!(spec.node_count(), 8);
        // browser->router->mfes, auth<->cognito leg, mfes->bus->auth.
        assert_eq!(spec.edge_count(), 5);
        assert_eq!(spec.cluster_count(), 7);
        assert_eq!(spec.direction(), Direction::LeftToRight);
    }
}
