//! Property-based tests for the pure functions.

#[cfg(test)]
mod tests {
    use crate::logout::resolve;
    use crate::record::{ID_TOKEN_KEY, SessionRecord};
    use crate::widget::{AuthenticationResult, Profile};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn origin() -> impl Strategy<Value = String> {
        "https?://[a-z]{1,12}(\\.[a-z]{2,5})?(:[0-9]{2,5})?"
    }

    proptest! {
        #[test]
        fn test_return_to_url_wins(
            url in "https://[a-z]{1,10}\\.test/[a-z/]{0,10}",
            path in proptest::option::of("/[a-z]{0,10}"),
            origin in origin(),
        ) {
            let mut auth = json!({ "logoutReturnToURL": url });
            if let Some(path) = path {
                auth["logoutReturnToPath"] = Value::String(path);
            }
            let config = json!({ "auth": auth });
            prop_assert_eq!(resolve(&config, &origin), url);
        }

        #[test]
        fn test_path_appended_to_origin(path in "/[a-zA-Z0-9/_-]{0,20}", origin in origin()) {
            let config = json!({ "auth": { "logoutReturnToPath": path.clone() } });
            prop_assert_eq!(resolve(&config, &origin), format!("{origin}{path}"));
        }

        #[test]
        fn test_resolve_is_idempotent(
            url in proptest::option::of("[a-z:/.]{0,12}"),
            path in proptest::option::of("/?[a-z]{0,8}"),
            origin in origin(),
        ) {
            let config = json!({ "auth": { "logoutReturnToURL": url, "logoutReturnToPath": path } });
            prop_assert_eq!(resolve(&config, &origin), resolve(&config, &origin));
        }

        #[test]
        fn test_build_keeps_non_null_fields_and_token(
            fields in proptest::collection::btree_map("[a-z_]{1,8}", proptest::option::of("[a-z0-9]{0,8}"), 0..8),
            token in "[a-zA-Z0-9.]{1,16}",
        ) {
            let profile: Profile = fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().map_or(Value::Null, Value::String)))
                .collect();
            let auth = AuthenticationResult::with_id_token(token.clone());

            let record = SessionRecord::build(Some(&profile), &auth);

            prop_assert_eq!(record.id_token(), Some(token.as_str()));
            for (k, v) in &fields {
                if k == ID_TOKEN_KEY {
                    continue;
                }
                match v {
                    Some(v) => prop_assert_eq!(record.get(k), Some(&Value::String(v.clone()))),
                    None => prop_assert!(record.get(k).is_none()),
                }
            }
            prop_assert_eq!(record.clone(), SessionRecord::build(Some(&profile), &auth));
        }
    }
}
