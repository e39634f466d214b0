//! Fixed vocabularies shared by the heuristic extractors and the keyword engine.

/// A skill with its display name and the lowercase spellings that identify it.
#[derive(Debug, Clone, Copy)]
pub struct SkillTerm {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

const fn skill(name: &'static str, variants: &'static [&'static str]) -> SkillTerm {
    SkillTerm { name, variants }
}

/// Technical and soft skills recognised anywhere in a résumé.
pub const SKILL_TERMS: &[SkillTerm] = &[
    // Languages
    skill("Python", &["python"]),
    skill("Java", &["java"]),
    skill("JavaScript", &["javascript", "js", "ecmascript"]),
    skill("TypeScript", &["typescript", "ts"]),
    skill("Rust", &["rust"]),
    skill("Go", &["golang"]),
    skill("C++", &["c++", "cpp"]),
    skill("C#", &["c#", "csharp"]),
    skill("C", &[]),
    skill("Ruby", &["ruby"]),
    skill("PHP", &["php"]),
    skill("Swift", &["swift"]),
    skill("Kotlin", &["kotlin"]),
    skill("Scala", &["scala"]),
    skill("R", &[]),
    skill("MATLAB", &["matlab"]),
    skill("Perl", &["perl"]),
    skill("Elixir", &["elixir"]),
    skill("Haskell", &["haskell"]),
    skill("Dart", &["dart"]),
    skill("Bash", &["bash", "shell scripting"]),
    skill("PowerShell", &["powershell"]),
    skill("SQL", &["sql"]),
    skill("HTML", &["html", "html5"]),
    skill("CSS", &["css", "css3"]),
    skill("Sass", &["sass", "scss"]),
    skill("Solidity", &["solidity"]),
    // Frameworks and libraries
    skill("React", &["react", "reactjs", "react.js"]),
    skill("Angular", &["angular", "angularjs"]),
    skill("Vue", &["vue", "vuejs", "vue.js"]),
    skill("Svelte", &["svelte"]),
    skill("Next.js", &["next.js", "nextjs"]),
    skill("Node.js", &["node.js", "nodejs", "node"]),
    skill("Express", &["express.js", "expressjs"]),
    skill("Django", &["django"]),
    skill("Flask", &["flask"]),
    skill("FastAPI", &["fastapi"]),
    skill("Spring", &["spring", "spring boot", "springboot"]),
    skill("Rails", &["rails", "ruby on rails"]),
    skill("Laravel", &["laravel"]),
    skill(".NET", &[".net", "dotnet", "asp.net"]),
    skill("jQuery", &["jquery"]),
    skill("Redux", &["redux"]),
    skill("Tailwind CSS", &["tailwind", "tailwindcss"]),
    skill("Bootstrap", &["bootstrap"]),
    skill("GraphQL", &["graphql"]),
    skill("REST APIs", &["restful", "rest api", "rest apis"]),
    skill("gRPC", &["grpc"]),
    skill("TensorFlow", &["tensorflow"]),
    skill("PyTorch", &["pytorch"]),
    skill("Keras", &["keras"]),
    skill("scikit-learn", &["scikit-learn", "sklearn"]),
    skill("Pandas", &["pandas"]),
    skill("NumPy", &["numpy"]),
    skill("Spark", &["spark", "apache spark", "pyspark"]),
    skill("Hadoop", &["hadoop"]),
    skill("Kafka", &["kafka", "apache kafka"]),
    skill("RabbitMQ", &["rabbitmq"]),
    skill("Flutter", &["flutter"]),
    skill("React Native", &["react native"]),
    skill("Unity", &["unity3d", "unity engine"]),
    // Databases
    skill("PostgreSQL", &["postgresql", "postgres", "psql"]),
    skill("MySQL", &["mysql"]),
    skill("SQLite", &["sqlite"]),
    skill("MongoDB", &["mongodb", "mongo"]),
    skill("Redis", &["redis"]),
    skill("Oracle", &["oracle"]),
    skill("SQL Server", &["sql server", "mssql"]),
    skill("DynamoDB", &["dynamodb"]),
    skill("Cassandra", &["cassandra"]),
    skill("Elasticsearch", &["elasticsearch", "elastic search"]),
    skill("Firebase", &["firebase"]),
    skill("Snowflake", &["snowflake"]),
    skill("BigQuery", &["bigquery"]),
    // Cloud and infrastructure
    skill("AWS", &["aws", "amazon web services"]),
    skill("Azure", &["azure", "microsoft azure"]),
    skill("GCP", &["gcp", "google cloud", "google cloud platform"]),
    skill("Docker", &["docker"]),
    skill("Kubernetes", &["kubernetes", "k8s"]),
    skill("Terraform", &["terraform"]),
    skill("Ansible", &["ansible"]),
    skill("Jenkins", &["jenkins"]),
    skill("GitHub Actions", &["github actions"]),
    skill("GitLab CI", &["gitlab ci", "gitlab-ci"]),
    skill("CI/CD", &["ci/cd", "cicd", "continuous integration", "continuous delivery"]),
    skill("Linux", &["linux", "unix"]),
    skill("Nginx", &["nginx"]),
    skill("Serverless", &["serverless", "lambda", "aws lambda"]),
    skill("Microservices", &["microservices", "microservice"]),
    skill("Prometheus", &["prometheus"]),
    skill("Grafana", &["grafana"]),
    skill("Datadog", &["datadog"]),
    skill("Heroku", &["heroku"]),
    skill("Vercel", &["vercel"]),
    // Tools and practices
    skill("Git", &["git"]),
    skill("GitHub", &["github"]),
    skill("Jira", &["jira"]),
    skill("Confluence", &["confluence"]),
    skill("Figma", &["figma"]),
    skill("Postman", &["postman"]),
    skill("Webpack", &["webpack"]),
    skill("Vite", &["vite"]),
    skill("Jest", &["jest"]),
    skill("Cypress", &["cypress"]),
    skill("Selenium", &["selenium"]),
    skill("JUnit", &["junit"]),
    skill("Pytest", &["pytest"]),
    skill("Unit Testing", &["unit testing", "unit tests", "tdd", "test-driven development"]),
    skill("Agile", &["agile"]),
    skill("Scrum", &["scrum"]),
    skill("Kanban", &["kanban"]),
    skill("DevOps", &["devops"]),
    skill("Machine Learning", &["machine learning", "ml"]),
    skill("Deep Learning", &["deep learning"]),
    skill("Natural Language Processing", &["natural language processing", "nlp"]),
    skill("Computer Vision", &["computer vision"]),
    skill("Data Analysis", &["data analysis", "data analytics"]),
    skill("Data Visualization", &["data visualization", "data visualisation"]),
    skill("Data Engineering", &["data engineering", "etl"]),
    skill("Tableau", &["tableau"]),
    skill("Power BI", &["power bi", "powerbi"]),
    skill("Excel", &["excel", "microsoft excel"]),
    skill("Statistics", &["statistics", "statistical analysis"]),
    skill("System Design", &["system design"]),
    skill("Distributed Systems", &["distributed systems"]),
    skill("Cybersecurity", &["cybersecurity", "security", "infosec"]),
    skill("OAuth", &["oauth", "oauth2"]),
    skill("Blockchain", &["blockchain"]),
    skill("UI/UX Design", &["ui/ux", "ux design", "ui design", "user experience"]),
    skill("SEO", &["seo"]),
    skill("Salesforce", &["salesforce"]),
    skill("SAP", &["sap"]),
    // Soft skills
    skill("Leadership", &["leadership"]),
    skill("Communication", &["communication", "communication skills"]),
    skill("Teamwork", &["teamwork", "team player", "collaboration"]),
    skill("Problem Solving", &["problem solving", "problem-solving"]),
    skill("Critical Thinking", &["critical thinking"]),
    skill("Time Management", &["time management"]),
    skill("Project Management", &["project management"]),
    skill("Mentoring", &["mentoring", "mentorship", "coaching"]),
    skill("Stakeholder Management", &["stakeholder management"]),
    skill("Public Speaking", &["public speaking", "presentations"]),
    skill("Negotiation", &["negotiation"]),
    skill("Adaptability", &["adaptability"]),
    skill("Attention to Detail", &["attention to detail"]),
    skill("Customer Service", &["customer service"]),
    skill("Strategic Planning", &["strategic planning"]),
];

/// Words that mark a line as naming a job title.
pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "architect",
    "manager",
    "director",
    "analyst",
    "scientist",
    "designer",
    "consultant",
    "administrator",
    "specialist",
    "coordinator",
    "lead",
    "intern",
    "head of",
    "vp",
    "cto",
    "ceo",
    "officer",
    "associate",
    "technician",
    "researcher",
];

/// Seniority markers that turn a role question into a leadership question.
pub const SENIORITY_KEYWORDS: &[&str] = &[
    "senior", "sr", "lead", "principal", "staff", "manager", "director", "head", "chief", "vp",
];

/// Company-name suffixes.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc",
    "Inc.",
    "LLC",
    "Ltd",
    "Ltd.",
    "Corp",
    "Corp.",
    "Corporation",
    "Company",
    "Co.",
    "Technologies",
    "Technology",
    "Solutions",
    "Systems",
    "Labs",
    "Group",
    "Consulting",
    "Software",
    "GmbH",
];

/// True when `term` occurs in `haystack` with no alphanumeric neighbour on
/// either side. Both arguments are expected lowercase.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(term) {
        let begin = start + pos;
        let end = begin + term.len();
        let before_ok = haystack[..begin]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        if before_ok && after_ok {
            return true;
        }
        start = begin
            + haystack[begin..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
    }
    false
}

/// Skill display names found anywhere in `text`, in dictionary order.
///
/// Single-letter names (`C`, `R`) are matched only by an exact token to avoid
/// picking up initials.
pub fn find_skills(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SKILL_TERMS
        .iter()
        .filter(|term| {
            if term.variants.is_empty() {
                return text
                    .split(|c: char| matches!(c, ',' | '|' | ';' | ':' | '\n'))
                    .any(|token| token.trim() == term.name);
            }
            term.variants.iter().any(|v| contains_term(&lower, v))
        })
        .map(|term| term.name)
        .collect()
}

/// Maps a free-form skill string onto its dictionary display name.
pub fn canonical_skill(raw: &str) -> Option<&'static str> {
    let lower = raw.trim().to_lowercase();
    SKILL_TERMS
        .iter()
        .find(|term| term.name.to_lowercase() == lower || term.variants.contains(&lower.as_str()))
        .map(|term| term.name)
}

/// Coarse grouping used to pick one technical interview question per area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Cloud,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Cloud,
    ];

    fn members(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Language => &[
                "Python", "Java", "JavaScript", "TypeScript", "Rust", "Go", "C++", "C#", "C",
                "Ruby", "PHP", "Swift", "Kotlin", "Scala", "R", "MATLAB", "Perl", "Elixir",
                "Haskell", "Dart", "Solidity",
            ],
            SkillCategory::Framework => &[
                "React", "Angular", "Vue", "Svelte", "Next.js", "Node.js", "Express", "Django",
                "Flask", "FastAPI", "Spring", "Rails", "Laravel", ".NET", "TensorFlow", "PyTorch",
                "Spark", "Flutter", "React Native",
            ],
            SkillCategory::Database => &[
                "PostgreSQL", "MySQL", "SQLite", "MongoDB", "Redis", "Oracle", "SQL Server",
                "DynamoDB", "Cassandra", "Elasticsearch", "Firebase", "Snowflake", "BigQuery",
            ],
            SkillCategory::Cloud => &[
                "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Serverless",
                "Heroku",
            ],
        }
    }

    pub fn of(skill: &str) -> Option<SkillCategory> {
        let name = canonical_skill(skill).unwrap_or(skill.trim());
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.members().iter().any(|m| m.eq_ignore_ascii_case(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("built apis in rust and go", "rust"));
        assert!(!contains_term("trusted partner", "rust"));
        assert!(contains_term("expert in c++, python", "c++"));
        assert!(contains_term("ci/cd pipelines", "ci/cd"));
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn test_contains_term_finds_later_occurrence() {
        assert!(contains_term("javascripting and javascript", "javascript"));
    }

    #[test]
    fn test_find_skills_uses_variants() {
        let skills = find_skills("Shipped features in JS and k8s; stored data in Postgres.");
        assert!(skills.contains(&"JavaScript"));
        assert!(skills.contains(&"Kubernetes"));
        assert!(skills.contains(&"PostgreSQL"));
        assert!(!skills.contains(&"Java"));
    }

    #[test]
    fn test_single_letter_skills_need_exact_token() {
        assert!(find_skills("Languages: C, Python").contains(&"C"));
        assert!(!find_skills("Jane C. Doe").contains(&"C"));
    }

    #[test]
    fn test_skill_category() {
        assert_eq!(SkillCategory::of("golang"), Some(SkillCategory::Language));
        assert_eq!(SkillCategory::of("postgres"), Some(SkillCategory::Database));
        assert_eq!(SkillCategory::of("K8s"), Some(SkillCategory::Cloud));
        assert_eq!(SkillCategory::of("Django"), Some(SkillCategory::Framework));
        assert_eq!(SkillCategory::of("Leadership"), None);
    }

    #[test]
    fn test_canonical_skill() {
        assert_eq!(canonical_skill("k8s"), Some("Kubernetes"));
        assert_eq!(canonical_skill(" Python "), Some("Python"));
        assert_eq!(canonical_skill("basket weaving"), None);
    }

    #[test]
    fn test_dictionary_is_large_and_unique() {
        assert!(SKILL_TERMS.len() >= 140);
        let mut names: Vec<&str> = SKILL_TERMS.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILL_TERMS.len());
    }
}
