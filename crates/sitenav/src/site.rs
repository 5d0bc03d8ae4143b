//! Built-in descriptor for the ngrok NixOS service documentation.

use sitenav_core::{ConfigError, SiteBuilder, SiteConfiguration};

/// Build the documentation site descriptor.
pub fn descriptor() -> Result<SiteConfiguration, ConfigError> {
    SiteBuilder::new("ngrok NixOS Service")
        .description("Comprehensive documentation for the ngrok NixOS service module")
        .social("github", "https://github.com/yourusername/nixgrok")
        .logo("./src/assets/logo.svg")
        .custom_css("./src/styles/custom.css")
        .group("Getting Started", |g| {
            g.leaf("Introduction", "introduction")
                .leaf("Quick Start", "quick-start")
                .leaf("Installation", "installation")
        })
        .group("Configuration", |g| {
            g.leaf("Basic Configuration", "config/basic")
                .leaf("Advanced Configuration", "config/advanced")
                .leaf("Security Options", "config/security")
                .leaf("Performance Tuning", "config/performance")
        })
        .group("Authentication", |g| {
            g.leaf("HTTP Basic Auth", "auth/basic")
                .leaf("OAuth Integration", "auth/oauth")
                .leaf("OIDC Support", "auth/oidc")
                .leaf("Webhook Verification", "auth/webhooks")
                .leaf("Mutual TLS", "auth/mtls")
        })
        .group("Examples", |g| {
            g.leaf("Basic Setup", "examples/basic")
                .leaf("Multi-Service", "examples/advanced")
                .leaf("OAuth Protected", "examples/oauth")
                .leaf("Enterprise Setup", "examples/enterprise")
        })
        .group("Flake-Parts", |g| {
            g.leaf("Overview", "flake-parts/overview")
                .leaf("Templates", "flake-parts/templates")
                .leaf("Modules", "flake-parts/modules")
                .leaf("Usage Patterns", "flake-parts/usage")
        })
        .group("Testing", |g| {
            g.leaf("VM Testing", "testing/vm")
                .leaf("Cross-Platform", "testing/cross-platform")
                .leaf("Continuous Integration", "testing/ci")
        })
        .group("Deployment", |g| {
            g.leaf("Production Setup", "deployment/production")
                .leaf("Monitoring", "deployment/monitoring")
                .leaf("Security Hardening", "deployment/security")
                .leaf("Troubleshooting", "deployment/troubleshooting")
        })
        .group("Reference", |g| {
            g.leaf("Configuration Options", "reference/options")
                .leaf("Service Management", "reference/services")
                .leaf("CLI Commands", "reference/cli")
                .leaf("API Reference", "reference/api")
        })
        .build()
}
