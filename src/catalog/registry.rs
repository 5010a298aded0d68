//! Standard module registry
//!
//! Backend, frontend, infrastructure, documentation, and example module definitions.

use super::types::ModuleRecord;

/// All standard records, grouped by category, in catalog order
pub(crate) fn standard_records() -> Vec<ModuleRecord> {
    let mut records = Vec::with_capacity(31);
    records.extend(backend_modules());
    records.extend(frontend_modules());
    records.extend(infrastructure_modules());
    records.extend(documentation_modules());
    records.extend(example_modules());
    records
}

fn backend(name: &str, description: &str, tech: &[&str], cicd: bool) -> ModuleRecord {
    ModuleRecord::new(name, "backend")
        .with_description(description)
        .with_tech(tech)
        .with_version("v0.1.0")
        .with_cicd(cicd)
}

fn frontend(name: &str, description: &str, tech: &[&str], cicd: bool) -> ModuleRecord {
    ModuleRecord::new(name, "frontend")
        .with_description(description)
        .with_tech(tech)
        .with_version("v0.2.0")
        .with_cicd(cicd)
}

fn backend_modules() -> Vec<ModuleRecord> {
    vec![
        backend("auth-module", "JWT + OAuth2.0 authentication", &["Go", "JWT", "OAuth2.0"], true),
        backend(
            "db-module",
            "GORM database abstraction (PostgreSQL, MySQL, SQLite)",
            &["Go", "GORM", "PostgreSQL"],
            true,
        ),
        backend("cache-module", "Redis caching client", &["Go", "Redis"], true),
        backend("logging-module", "Structured logging with Zap", &["Go", "Zap"], false),
        backend(
            "api-gateway",
            "Gin-based API gateway with routing and middleware",
            &["Go", "Gin"],
            true,
        ),
        backend(
            "messaging-module",
            "RabbitMQ/Kafka message queue abstraction",
            &["Go", "RabbitMQ", "Kafka"],
            false,
        ),
        backend("file-storage-module", "S3/MinIO file storage", &["Go", "S3", "MinIO"], false),
        backend(
            "notification-module",
            "Email/SMS/Push notifications",
            &["Go", "SMTP", "Twilio"],
            false,
        ),
        backend(
            "monitoring-module",
            "Prometheus metrics and monitoring",
            &["Go", "Prometheus"],
            false,
        ),
        backend("task-scheduler", "Cron job scheduler", &["Go", "Cron"], false),
        backend(
            "search-module",
            "Elasticsearch search integration",
            &["Go", "Elasticsearch"],
            true,
        ),
        backend(
            "payment-module",
            "Stripe/PayPal payment processing",
            &["Go", "Stripe", "PayPal"],
            true,
        ),
    ]
}

fn frontend_modules() -> Vec<ModuleRecord> {
    vec![
        frontend(
            "ui-components",
            "Tailwind CSS React UI components with Card, Spinner, and utility functions",
            &["React", "TypeScript", "Tailwind CSS"],
            true,
        ),
        frontend(
            "api-client",
            "Axios REST API client with React hooks and retry logic",
            &["TypeScript", "Axios"],
            true,
        ),
        frontend(
            "state-management",
            "Redux Toolkit state management with typed hooks",
            &["TypeScript", "Redux Toolkit"],
            true,
        ),
        frontend(
            "form-validation",
            "React Hook Form + Zod validation with common schemas",
            &["React", "TypeScript", "Zod"],
            false,
        ),
        frontend(
            "routing",
            "React Router navigation with ProtectedRoute and hooks",
            &["React", "TypeScript", "React Router"],
            true,
        ),
        frontend(
            "auth-client",
            "Frontend authentication client with JWT utilities",
            &["TypeScript", "React"],
            true,
        ),
        frontend(
            "error-handling",
            "Error Boundary components with ErrorLogger",
            &["React", "TypeScript"],
            false,
        ),
        frontend(
            "websocket-client",
            "WebSocket client with auto-reconnect and React hook",
            &["TypeScript", "WebSocket"],
            false,
        ),
        frontend(
            "i18n",
            "Internationalization with i18next, formatters, and language sync",
            &["React", "TypeScript", "i18next"],
            false,
        ),
        frontend(
            "chart-components",
            "Chart.js React chart components with themes",
            &["React", "TypeScript", "Chart.js"],
            false,
        ),
        frontend(
            "table-components",
            "TanStack Table components with CSV export and pagination",
            &["React", "TypeScript", "TanStack Table"],
            false,
        ),
        frontend(
            "analytics-client",
            "Google Analytics integration with useAnalytics hook",
            &["TypeScript", "Google Analytics"],
            false,
        ),
    ]
}

fn infrastructure_modules() -> Vec<ModuleRecord> {
    vec![
        ModuleRecord::new("shared-configs", "infrastructure")
            .with_description("Shared ESLint, Prettier, TypeScript configs, GitHub Actions, Testing")
            .with_tech(&["ESLint", "Prettier", "TypeScript", "GitHub Actions"])
            .with_version("v0.3.0"),
        ModuleRecord::new("modules-manifest", "infrastructure")
            .with_description("Multi-repo management with profile-based syncing")
            .with_tech(&["Shell", "JSON"]),
        ModuleRecord::new("module-catalog-mcp", "infrastructure")
            .with_description("MCP Server for AI-powered module search")
            .with_tech(&["TypeScript", "MCP"]),
        ModuleRecord::new("claude-code-templates", "infrastructure")
            .with_description("Claude Code slash command templates")
            .with_tech(&["Markdown"]),
    ]
}

fn documentation_modules() -> Vec<ModuleRecord> {
    vec![
        ModuleRecord::new("docs-dev", "documentation")
            .with_description("Architecture documentation and guides")
            .with_tech(&["Markdown"]),
        ModuleRecord::new("docs-site", "documentation")
            .with_description("Docusaurus documentation website")
            .with_tech(&["Docusaurus", "React", "TypeScript"])
            .with_version("v0.2.0"),
    ]
}

fn example_modules() -> Vec<ModuleRecord> {
    vec![ModuleRecord::new("examples", "examples")
        .with_description("Production templates: E-Commerce API, Task Management, Real-Time Chat")
        .with_tech(&["Go", "React", "TypeScript", "Docker"])
        .with_version("v0.2.0")]
}
