//! Conversion of configuration keys into container environment variable names.

/// Convert a lowerCamelCase key into UPPER_SNAKE_CASE.
///
/// A separator is inserted before every ASCII uppercase letter except a leading
/// one, so `takeEveryN` becomes `TAKE_EVERY_N`. Only ASCII letters change case;
/// other characters pass through untouched. The conversion is one-directional.
pub fn to_env_var_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);

    for (index, ch) in key.chars().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            name.push('_');
        }
        name.push(ch.to_ascii_uppercase());
    }

    name
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn converts_sample_keys() {
        assert_eq!(to_env_var_name("takeN"), "TAKE_N");
        assert_eq!(to_env_var_name("ignoreFirstN"), "IGNORE_FIRST_N");
        assert_eq!(to_env_var_name("takeEveryN"), "TAKE_EVERY_N");
    }

    #[test]
    fn single_word_is_only_uppercased() {
        assert_eq!(to_env_var_name("limit"), "LIMIT");
        assert_eq!(to_env_var_name("take2"), "TAKE2");
    }

    #[test]
    fn leading_uppercase_gets_no_separator() {
        assert_eq!(to_env_var_name("TakeN"), "TAKE_N");
    }

    #[test]
    fn non_ascii_letters_pass_through() {
        assert_eq!(to_env_var_name("größeN"), "GRößE_N");
        assert_eq!(to_env_var_name("takeÉtat"), "TAKEÉTAT");
    }

    proptest! {
        #[test]
        fn output_has_no_lowercase_letters(key in "[a-z][a-zA-Z0-9]{0,24}") {
            let name = to_env_var_name(&key);
            prop_assert!(!name.chars().any(|c| c.is_ascii_lowercase()));
        }

        #[test]
        fn one_separator_per_inner_uppercase(key in "[a-z][a-zA-Z0-9]{0,24}") {
            let uppercase = key.chars().filter(|c| c.is_ascii_uppercase()).count();
            let name = to_env_var_name(&key);
            prop_assert_eq!(name.matches('_').count(), uppercase);
            prop_assert_eq!(name.len(), key.len() + uppercase);
        }
    }
}
