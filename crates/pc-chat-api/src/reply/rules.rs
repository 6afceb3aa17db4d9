//! Keyword rule table: ordered regex patterns, first match wins.
//!
//! Patterns run against a lower-cased, trimmed copy of the message. The
//! table always ends in a catch-all, so a lookup cannot miss. Topics are
//! not mutually exclusive ("cloud services" hits both aws and services);
//! table order decides.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// One `(pattern, reply)` entry.
#[derive(Debug, Clone)]
pub struct Rule {
    topic: String,
    pattern: Regex,
    reply: String,
}

impl Rule {
    /// Compile a case-insensitive rule.
    pub fn new(
        topic: impl Into<String>,
        pattern: &str,
        reply: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            topic: topic.into(),
            pattern,
            reply: reply.into(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub topic: &'a str,
    pub reply: &'a str,
}

/// Topic name reported when only the catch-all matched.
pub const DEFAULT_TOPIC: &str = "default";

/// Ordered rules plus the catch-all reply.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default_reply: String,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>, default_reply: impl Into<String>) -> Self {
        Self {
            rules,
            default_reply: default_reply.into(),
        }
    }

    /// The portfolio assistant's built-in table, compiled once.
    pub fn portfolio() -> &'static RuleTable {
        &PORTFOLIO
    }

    /// Topics in evaluation order, ending with the catch-all.
    pub fn topics(&self) -> Vec<&str> {
        self.rules
            .iter()
            .map(Rule::topic)
            .chain(std::iter::once(DEFAULT_TOPIC))
            .collect()
    }

    /// First matching rule for `message`, or the catch-all.
    pub fn lookup(&self, message: &str) -> RuleMatch<'_> {
        let normalized = normalize(message);
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| RuleMatch {
                topic: rule.topic(),
                reply: rule.reply(),
            })
            .unwrap_or(RuleMatch {
                topic: DEFAULT_TOPIC,
                reply: &self.default_reply,
            })
    }

    pub fn reply_for(&self, message: &str) -> &str {
        self.lookup(message).reply
    }
}

/// Lower-case and trim.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

// ── Portfolio table ─────────────────────────────────────────────

const GREETING: &str = "Hello! I'm Rayhan's assistant. I can help you learn about his DevOps expertise, services, and availability. What would you like to know?";

const SKILLS: &str = "Rayhan specializes in:\n\n\
• Cloud Infrastructure: AWS (EC2, S3, Lambda, RDS, VPC)\n\
• Container Orchestration: Kubernetes, Docker\n\
• Infrastructure as Code: Terraform, CloudFormation\n\
• CI/CD: Jenkins, GitLab CI, GitHub Actions\n\
• Monitoring: Prometheus, Grafana, CloudWatch\n\
• Scripting: Python, Bash\n\n\
Would you like details on any specific area?";

const AWS: &str = "Rayhan has extensive AWS experience including:\n\n\
• Designing multi-AZ production environments\n\
• Cost optimization strategies\n\
• Security best practices (IAM, VPC, Security Groups)\n\
• Serverless architectures (Lambda, API Gateway)\n\
• Database management (RDS, DynamoDB)\n\n\
He can help migrate your infrastructure to AWS or optimize existing setups.";

const CONTAINERS: &str = "Rayhan can help with:\n\n\
• Kubernetes cluster setup and management\n\
• Helm charts and package management\n\
• Docker containerization strategies\n\
• Microservices deployment\n\
• Auto-scaling and load balancing\n\n\
He's deployed production-grade container orchestration for multiple clients.";

const IAC: &str = "Rayhan uses Infrastructure as Code extensively:\n\n\
• Terraform for multi-cloud deployments\n\
• Modular and reusable infrastructure code\n\
• State management best practices\n\
• CI/CD integration for infrastructure\n\n\
He can help you implement IaC from scratch or improve existing setups.";

const SERVICES: &str = "Rayhan offers:\n\n\
• Cloud Architecture Design\n\
• Infrastructure Migration (on-prem to cloud)\n\
• CI/CD Pipeline Implementation\n\
• Container Orchestration Setup\n\
• Monitoring & Observability Solutions\n\
• DevOps Consulting & Training\n\n\
All solutions are tailored to your specific needs and scale.";

const PRICING: &str = "Rayhan's rates vary based on project scope and complexity:\n\n\
• Hourly consulting: $100-150/hour\n\
• Project-based pricing available\n\
• Long-term contracts negotiable\n\n\
For a detailed quote, please use the contact form or email directly.";

const AVAILABILITY: &str = "Rayhan is currently available for new projects! He typically responds to inquiries within 24 hours. Use the contact form on this site or reach out directly to discuss your needs.";

const CONTACT: &str = "You can reach Rayhan through:\n\n\
• Contact form on this website (scroll down)\n\
• Email: rayhan@example.com\n\
• LinkedIn: [link in footer]\n\n\
He typically responds within 24 hours.";

const PROJECTS: &str = "Rayhan has worked on:\n\n\
• Multi-AZ AWS production environments for high-traffic applications\n\
• Kubernetes cluster migrations serving 100k+ users\n\
• CI/CD pipelines reducing deployment time by 80%\n\
• Infrastructure cost optimization saving clients 40%+\n\n\
Scroll down to see detailed case studies!";

const EXPERIENCE: &str = "Rayhan has 5+ years of DevOps experience, working with startups and enterprises. He's handled infrastructure serving millions of users and has expertise in both greenfield projects and legacy system modernization.";

const DEFAULT_REPLY: &str = "I can help you learn about:\n\n\
• Rayhan's skills and expertise\n\
• Services offered\n\
• Pricing and availability\n\
• Past projects\n\
• How to get in touch\n\n\
What would you like to know?";

/// `(topic, pattern, reply)` in priority order. Greeting is anchored to the
/// start of the message and outranks every keyword.
const PORTFOLIO_RULES: &[(&str, &str, &str)] = &[
    ("greeting", r"^(hi|hello|hey|greetings)", GREETING),
    ("skills", r"skill|expertise|technology|tech stack|what.*know", SKILLS),
    ("aws", r"aws|amazon|cloud", AWS),
    ("containers", r"kubernetes|k8s|docker|container", CONTAINERS),
    ("iac", r"terraform|infrastructure.*code|iac", IAC),
    ("services", r"service|offer|help|do", SERVICES),
    ("pricing", r"price|cost|rate|fee|charge|budget", PRICING),
    ("availability", r"available|availability|hire|when", AVAILABILITY),
    ("contact", r"contact|email|reach|get in touch", CONTACT),
    ("projects", r"project|portfolio|work|example|case study", PROJECTS),
    ("experience", r"experience|background|years", EXPERIENCE),
];

static PORTFOLIO: LazyLock<RuleTable> = LazyLock::new(|| {
    let rules = PORTFOLIO_RULES
        .iter()
        .map(|(topic, pattern, reply)| Rule::new(*topic, pattern, *reply).unwrap())
        .collect();
    RuleTable::new(rules, DEFAULT_REPLY)
});
