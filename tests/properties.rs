use certpush::push::builder::build;
use certpush::push::interpreter;
use certpush::push_core::constants::nodes;
use certpush::push_core::models::{NodeId, Outcome, StatusCode, Variant};
use certpush::push_core::records::{PrivateKey, UpdateCertificate};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop_oneof![
        any::<bool>().prop_map(Variant::Boolean),
        "[a-zA-Z0-9=, ]{0,16}".prop_map(Variant::String),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Variant::ByteString),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..4)
            .prop_map(Variant::ByteStringArray),
        (0u32..20000).prop_map(|i| Variant::NodeId(NodeId::numeric(0, i))),
        Just(Variant::Null),
    ]
}

fn bad_status() -> impl Strategy<Value = StatusCode> {
    (0x8000_0000u32..=0xFFFF_FFFF).prop_map(StatusCode::from_bits)
}

fn any_private_key() -> impl Strategy<Value = Option<PrivateKey>> {
    prop::option::of(
        (any::<bool>(), prop::collection::vec(any::<u8>(), 0..32)).prop_map(|(pem, data)| {
            if pem {
                PrivateKey::pem(data)
            } else {
                PrivateKey::pfx(data)
            }
        }),
    )
}

proptest! {
    #[test]
    fn test_private_key_pair_is_all_or_nothing(
        key in any_private_key(),
        certificate in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let mut request = UpdateCertificate::new(
            nodes::DEFAULT_APPLICATION_GROUP,
            nodes::RSA_SHA256_APPLICATION_CERTIFICATE_TYPE,
            certificate,
        );
        request.private_key = key.clone();

        let inv = build(request);
        let args = inv.input_arguments();
        prop_assert_eq!(args.len(), 6);
        prop_assert_eq!(args[4].is_null(), args[5].is_null());
        prop_assert_eq!(args[4].is_null(), key.is_none());
        if let Some(key) = key {
            prop_assert_eq!(&args[4], &Variant::String(key.format.as_str().to_string()));
            prop_assert_eq!(&args[5], &Variant::ByteString(key.data));
        }
    }

    #[test]
    fn test_bad_status_never_yields_typed_fields(
        status in bad_status(),
        outputs in prop::collection::vec(any_variant(), 0..4),
    ) {
        let csr = interpreter::signing_request(Outcome::new(status, outputs.clone()));
        prop_assert_eq!(csr.status(), status);
        prop_assert!(csr.signing_request().is_none());

        let list = interpreter::rejected_list(Outcome::new(status, outputs.clone()));
        prop_assert_eq!(list.status(), status);
        prop_assert!(list.certificates().is_none());

        let update = interpreter::update_certificate(Outcome::new(status, outputs));
        prop_assert_eq!(update.status(), status);
        prop_assert!(update.apply_change_required().is_none());
    }

    #[test]
    fn test_good_status_fields_match_status(
        outputs in prop::collection::vec(any_variant(), 0..4),
    ) {
        let list = interpreter::rejected_list(Outcome::good(outputs.clone()));
        prop_assert_eq!(list.certificates().is_some(), list.status() == StatusCode::GOOD);

        let update = interpreter::update_certificate(Outcome::good(outputs.clone()));
        prop_assert_eq!(update.apply_change_required().is_some(), update.status() == StatusCode::GOOD);

        let applied = interpreter::apply_changes(Outcome::good(outputs.clone()));
        prop_assert_eq!(applied.is_err(), !outputs.is_empty());
    }

    #[test]
    fn test_node_id_text_form_parses_back(
        namespace in any::<u16>(),
        numeric in any::<u32>(),
        name in "[A-Za-z][A-Za-z0-9_.]{0,24}",
    ) {
        let id = NodeId::numeric(namespace, numeric);
        prop_assert_eq!(id.to_string().parse::<NodeId>().unwrap(), id);

        let id = NodeId::string(namespace, name);
        prop_assert_eq!(id.to_string().parse::<NodeId>().unwrap(), id);
    }
}
