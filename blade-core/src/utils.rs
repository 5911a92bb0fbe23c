//! Shared utility functions for code generation.

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

/// Convert a string to PascalCase (e.g., "blog_post" -> "BlogPost")
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_separator)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "BlogPost" -> "blogPost")
///
/// Built from the snake_case words, so "HTTPLog" -> "httpLog".
pub fn to_camel_case(s: &str) -> String {
    let snake = to_snake_case(s);
    let mut words = snake.split('_').filter(|w| !w.is_empty());
    let mut result = words.next().unwrap_or_default().to_string();
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Convert a string to snake_case (e.g., "BlogPost" -> "blog_post")
///
/// Acronyms stay together: "HTTPLog" -> "http_log".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    result
}

/// Check that a name is a plain identifier usable as a PHP property or class name.
///
/// Returns the reason when it is not.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name may only contain letters, digits, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("User"), "User");
        assert_eq!(to_pascal_case("blog_post"), "BlogPost");
        assert_eq!(to_pascal_case("blog-post"), "BlogPost");
        assert_eq!(to_pascal_case("BlogPost"), "BlogPost");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("User"), "user");
        assert_eq!(to_camel_case("blog_post"), "blogPost");
        assert_eq!(to_camel_case("BlogPost"), "blogPost");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("HTTPLog"), "httpLog");
        assert_eq!(to_camel_case("blog-post"), "blogPost");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("User"), "user");
        assert_eq!(to_snake_case("BlogPost"), "blog_post");
        assert_eq!(to_snake_case("blog_post"), "blog_post");
        assert_eq!(to_snake_case("blog-post"), "blog_post");
        assert_eq!(to_snake_case("HTTPLog"), "http_log");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("Order2Item"), "order2_item");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("email"), None);
        assert_eq!(validate_identifier("_token"), None);
        assert_eq!(validate_identifier("created_at2"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fa").is_some());
        assert!(validate_identifier("first name").is_some());
        assert!(validate_identifier("first-name").is_some());
    }
}
