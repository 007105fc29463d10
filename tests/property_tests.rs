//! Property-based tests for the order payload boundary.
//!
//! Any well-formed payload must parse and convert to a row and back without
//! losing a field. Extra keys are ignored; out-of-range ids are refused.

use chrono::NaiveDate;
use dairy_sales_api::{
    dto::{OrderCreateRequest, OrderResponse},
    entities::order,
};
use proptest::prelude::*;
use sea_orm::ActiveValue;
use serde_json::json;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn id_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![1i32..1_000, any::<i32>()]
}

fn extra_key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_filter("must not be a known field", |k| {
        ![
            "fecha",
            "id_vendedor",
            "id_supermercado",
            "id_representante",
            "id_forma_pago",
        ]
        .contains(&k.as_str())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn well_formed_payloads_parse(
        fecha in date_strategy(),
        vendedor in id_strategy(),
        supermercado in id_strategy(),
        representante in id_strategy(),
        forma_pago in id_strategy(),
    ) {
        let payload = json!({
            "fecha": fecha.format("%Y-%m-%d").to_string(),
            "id_vendedor": vendedor,
            "id_supermercado": supermercado,
            "id_representante": representante,
            "id_forma_pago": forma_pago,
        });

        let request: OrderCreateRequest = serde_json::from_value(payload).unwrap();
        prop_assert_eq!(request.fecha, fecha);
        prop_assert_eq!(request.id_vendedor, vendedor);
        prop_assert_eq!(request.id_supermercado, supermercado);
        prop_assert_eq!(request.id_representante, representante);
        prop_assert_eq!(request.id_forma_pago, forma_pago);
    }

    #[test]
    fn stored_row_echoes_every_input_field(
        fecha in date_strategy(),
        ids in (id_strategy(), id_strategy(), id_strategy(), id_strategy()),
        id_orden in 1i32..i32::MAX,
    ) {
        let request = OrderCreateRequest {
            fecha,
            id_vendedor: ids.0,
            id_supermercado: ids.1,
            id_representante: ids.2,
            id_forma_pago: ids.3,
        };

        let active = request.clone().into_active_model();
        prop_assert!(matches!(active.id, ActiveValue::NotSet));

        let response = OrderResponse::from(order::Model {
            id: id_orden,
            date: fecha,
            vendor_id: ids.0,
            supermarket_id: ids.1,
            representative_id: ids.2,
            payment_method_id: ids.3,
        });
        prop_assert_eq!(response.id_orden, id_orden);
        prop_assert_eq!(response.fecha, request.fecha);
        prop_assert_eq!(response.id_vendedor, request.id_vendedor);
        prop_assert_eq!(response.id_supermercado, request.id_supermercado);
        prop_assert_eq!(response.id_representante, request.id_representante);
        prop_assert_eq!(response.id_forma_pago, request.id_forma_pago);
    }

    #[test]
    fn extra_keys_are_ignored(key in extra_key_strategy(), value in any::<i64>()) {
        let mut payload = json!({
            "fecha": "2024-01-15",
            "id_vendedor": 1,
            "id_supermercado": 1,
            "id_representante": 1,
            "id_forma_pago": 1,
        });
        payload[key.as_str()] = json!(value);

        let request: OrderCreateRequest = serde_json::from_value(payload).unwrap();
        prop_assert_eq!(request.id_vendedor, 1);
        prop_assert_eq!(request.id_forma_pago, 1);
    }

    #[test]
    fn out_of_range_ids_are_refused(big in (i32::MAX as i64 + 1)..i64::MAX) {
        let payload = json!({
            "fecha": "2024-01-15",
            "id_vendedor": big,
            "id_supermercado": 1,
            "id_representante": 1,
            "id_forma_pago": 1,
        });

        prop_assert!(serde_json::from_value::<OrderCreateRequest>(payload).is_err());
    }
}
