// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use arbitrary::Arbitrary;
use certpush::push::interpreter;
use certpush::push_core::models::{NodeId, Outcome, StatusCode, Variant};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzVariant {
    NodeId(u16, u32),
    String(String),
    Boolean(bool),
    ByteString(Vec<u8>),
    ByteStringArray(Vec<Vec<u8>>),
    Null,
}

impl From<FuzzVariant> for Variant {
    fn from(v: FuzzVariant) -> Self {
        match v {
            FuzzVariant::NodeId(ns, i) => Variant::NodeId(NodeId::numeric(ns, i)),
            FuzzVariant::String(s) => Variant::String(s),
            FuzzVariant::Boolean(b) => Variant::Boolean(b),
            FuzzVariant::ByteString(b) => Variant::ByteString(b),
            FuzzVariant::ByteStringArray(a) => Variant::ByteStringArray(a),
            FuzzVariant::Null => Variant::Null,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzOutcome {
    status: u32,
    outputs: Vec<FuzzVariant>,
}

fuzz_target!(|input: FuzzOutcome| {
    // No outcome the server can send may panic the interpreter, and typed
    // fields must only appear alongside a Good status.
    let outputs: Vec<Variant> = input.outputs.into_iter().map(Variant::from).collect();
    let outcome = Outcome::new(StatusCode::from_bits(input.status), outputs);

    let csr = interpreter::signing_request(outcome.clone());
    assert!(csr.signing_request().is_none() || csr.status().is_good());

    let list = interpreter::rejected_list(outcome.clone());
    assert!(list.certificates().is_none() || list.status().is_good());

    let update = interpreter::update_certificate(outcome.clone());
    assert!(update.apply_change_required().is_none() || update.status().is_good());

    let _ = interpreter::apply_changes(outcome);
});
