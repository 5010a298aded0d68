//! Use-case recommendation rule table

/// Trigger keywords mapped to the modules they surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRule {
    /// Short label used in logs
    pub label: &'static str,
    /// Substrings that fire this rule (any match)
    pub triggers: &'static [&'static str],
    /// Module names contributed when fired
    pub modules: &'static [&'static str],
}

impl RecommendationRule {
    /// Whether any trigger occurs in `use_case_lower`
    pub fn fires(&self, use_case_lower: &str) -> bool {
        self.triggers.iter().any(|t| use_case_lower.contains(t))
    }
}

/// Standard rules, evaluated in order.
///
/// The "realtime" and "chat" rules both trigger on `chat`; both are kept.
pub const STANDARD_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        label: "authentication",
        triggers: &["auth", "login", "register"],
        modules: &["auth-module", "auth-client"],
    },
    RecommendationRule {
        label: "database",
        triggers: &["database", "data", "store"],
        modules: &["db-module", "cache-module"],
    },
    RecommendationRule {
        label: "api",
        triggers: &["api", "rest", "http"],
        modules: &["api-gateway", "api-client"],
    },
    RecommendationRule {
        label: "ui",
        triggers: &["ui", "frontend", "component"],
        modules: &["ui-components", "routing", "state-management"],
    },
    RecommendationRule {
        label: "realtime",
        triggers: &["realtime", "websocket", "chat"],
        modules: &["websocket-client", "messaging-module"],
    },
    RecommendationRule {
        label: "payment",
        triggers: &["payment", "checkout", "stripe"],
        modules: &["payment-module"],
    },
    RecommendationRule {
        label: "search",
        triggers: &["search", "elasticsearch"],
        modules: &["search-module"],
    },
    RecommendationRule {
        label: "file-upload",
        triggers: &["file", "upload", "storage"],
        modules: &["file-storage-module"],
    },
    RecommendationRule {
        label: "notifications",
        triggers: &["notification", "email", "sms"],
        modules: &["notification-module"],
    },
    RecommendationRule {
        label: "monitoring",
        triggers: &["monitor", "metric", "prometheus"],
        modules: &["monitoring-module", "logging-module"],
    },
    RecommendationRule {
        label: "charts",
        triggers: &["chart", "graph", "visual"],
        modules: &["chart-components", "table-components"],
    },
    RecommendationRule {
        label: "forms",
        triggers: &["form", "validation"],
        modules: &["form-validation"],
    },
    RecommendationRule {
        label: "i18n",
        triggers: &["i18n", "translation", "language"],
        modules: &["i18n"],
    },
    RecommendationRule {
        label: "ecommerce",
        triggers: &["ecommerce", "shop", "product"],
        modules: &[
            "auth-module",
            "db-module",
            "cache-module",
            "payment-module",
            "search-module",
            "file-storage-module",
            "monitoring-module",
        ],
    },
    RecommendationRule {
        label: "task-management",
        triggers: &["task", "project", "kanban"],
        modules: &[
            "auth-module",
            "db-module",
            "cache-module",
            "websocket-client",
            "notification-module",
            "file-storage-module",
            "ui-components",
            "state-management",
            "routing",
        ],
    },
    RecommendationRule {
        label: "chat",
        triggers: &["chat", "messaging"],
        modules: &[
            "auth-module",
            "db-module",
            "cache-module",
            "websocket-client",
            "messaging-module",
            "search-module",
            "file-storage-module",
            "notification-module",
            "ui-components",
            "state-management",
        ],
    },
];
