use super::Category;

/// Placeholder replaced by the target domain
pub const TARGET_PLACEHOLDER: &str = "{target}";

const PANELS_AUTH: &[&str] = &[
    r#"site:{target} intitle:"login" | "admin" | "dashboard""#,
    r#"site:{target} inurl:login | admin | wp-admin | administrator"#,
    r#"site:{target} "index of /admin""#,
    r#"site:{target} "admin panel" | "control panel""#,
    r#"site:{target} filetype:php inurl:login"#,
];

const SENSITIVE_FILES: &[&str] = &[
    r#"site:{target} ext:env | ext:yml | ext:yaml | ext:config"#,
    r#"site:{target} "SECRET_KEY" | "API_KEY" | "PASSWORD""#,
    r#"site:{target} filetype:sql | filetype:db | filetype:mdb"#,
    r#"site:{target} "robots.txt" "disallow:""#,
    r#"site:{target} "phpinfo()" "PHP Version""#,
];

const ERRORS_DEBUG: &[&str] = &[
    r#"site:{target} "error" | "exception" | "stack trace""#,
    r#"site:{target} "debug" | "testing" | "staging""#,
    r#"site:{target} "internal server error" | "500 error""#,
    r#"site:{target} "syntax error" | "mysql_fetch""#,
];

const APIS_ENDPOINTS: &[&str] = &[
    r#"site:{target} inurl:api | endpoint | graphql | rest"#,
    r#"site:{target} "swagger" | "openapi" | "postman""#,
    r#"site:{target} "api/v1" | "api/v2" | "v1/api""#,
    r#"site:{target} filetype:json | filetype:xml inurl:api"#,
];

const OSINT: &[&str] = &[
    r#"site:{target} "@example.com" | "contact" | "about""#,
    r#"site:{target} filetype:pdf | filetype:doc | filetype:docx"#,
    r#"site:{target} "employee" | "team" | "careers""#,
    r#"site:{target} "confidential" | "internal" | "private""#,
];

const VULNERABILITIES: &[&str] = &[
    r#"site:{target} "wp-content" "vulnerable""#,
    r#"site:{target} "sql injection" | "xss" | "csrf""#,
    r#"site:{target} "cve-" | "security update""#,
    r#"site:{target} "unauthorized access" | "breach""#,
];

const BACKUPS: &[&str] = &[
    r#"site:{target} ext:bak | ext:old | ext:backup"#,
    r#"site:{target} "backup" | "dump" | "archive""#,
    r#"site:{target} "*.tar.gz" | "*.zip" | "*.rar""#,
    r#"site:{target} "database backup" | "db dump""#,
];

const CONFIG_FILES: &[&str] = &[
    r#"site:{target} filetype:ini | filetype:cfg | filetype:conf"#,
    r#"site:{target} ".git/config" | ".env.example""#,
    r#"site:{target} "config.php" | "settings.py""#,
    r#"site:{target} "docker-compose.yml" | "dockerfile""#,
];

const DIRECTORIES: &[&str] = &[
    r#"site:{target} "index of /" "parent directory""#,
    r#"site:{target} intitle:"index of""#,
    r#"site:{target} "directory listing""#,
    r#"site:{target} inurl:/uploads/ | /files/ | /assets/"#,
];

const DATABASE: &[&str] = &[
    r#"site:{target} "mysql dump" | "pg_dump""#,
    r#"site:{target} "db.sql" | "database.sql""#,
    r#"site:{target} "INSERT INTO" | "CREATE TABLE""#,
    r#"site:{target} filetype:sql "-- Dump""#,
];

/// Fixed template list for a category
pub fn templates_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::PanelsAuth => PANELS_AUTH,
        Category::SensitiveFiles => SENSITIVE_FILES,
        Category::ErrorsDebug => ERRORS_DEBUG,
        Category::ApisEndpoints => APIS_ENDPOINTS,
        Category::Osint => OSINT,
        Category::Vulnerabilities => VULNERABILITIES,
        Category::Backups => BACKUPS,
        Category::ConfigFiles => CONFIG_FILES,
        Category::Directories => DIRECTORIES,
        Category::Database => DATABASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_counts() {
        let counts: Vec<usize> = Category::ALL.iter().map(|c| templates_for(*c).len()).collect();
        assert_eq!(counts, vec![5, 5, 4, 4, 4, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_every_template_is_site_scoped() {
        for category in Category::ALL {
            for template in templates_for(category) {
                assert!(
                    template.starts_with("site:{target} "),
                    "{} template not site scoped: {}", category, template
                );
                assert_eq!(template.matches(TARGET_PLACEHOLDER).count(), 1);
            }
        }
    }
}
