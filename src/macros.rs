/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals. Any other expression is converted
/// with [`to_value`](crate::to_value); one that fails to convert becomes null.
/// Call [`to_value`](crate::to_value) directly when the failure matters.
///
/// ```rust
/// use serde_dsv::dsv;
///
/// let records = dsv!([
///     { "name": "John", "age": 30, "tags": ["a", "b"] },
///     { "name": "Jane", "manager": null }
/// ]);
/// assert_eq!(records.as_array().map(Vec::len), Some(2));
/// ```
#[macro_export]
macro_rules! dsv {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dsv!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::DsvMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::DsvMap::new();
        $(
            object.insert($key.to_string(), $crate::dsv!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Conversion errors fold to null.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{to_value, DsvMap, ErrorCode, Number, Value};
    use serde::ser::{Error as _, Serialize, Serializer};

    #[test]
    fn test_dsv_macro_primitives() {
        assert_eq!(dsv!(null), Value::Null);
        assert_eq!(dsv!(true), Value::Bool(true));
        assert_eq!(dsv!(42), Value::Number(Number::Integer(42)));
        assert_eq!(dsv!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(dsv!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_dsv_macro_nested() {
        assert_eq!(dsv!({}), Value::Object(DsvMap::new()));

        let obj = dsv!({
            "name": "Alice",
            "meta": { "roles": ["admin"] }
        });

        let map = obj.as_object().unwrap();
        assert_eq!(map.len(), 2);
        let roles = map
            .get("meta")
            .and_then(Value::as_object)
            .and_then(|m| m.get("roles"))
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(roles, &vec![Value::from("admin")]);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("no value"))
        }
    }

    #[test]
    fn test_dsv_macro_failed_conversion_is_null() {
        assert_eq!(dsv!(Unserializable), Value::Null);
        let record = dsv!({ "a": (Unserializable) });
        assert_eq!(record.as_object().and_then(|m| m.get("a")), Some(&Value::Null));

        let err = to_value(&Unserializable).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnexpectedError);
    }
}
