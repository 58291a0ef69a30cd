// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn timeout_outcome_classifies_as_conn_timeout() {
    let e = classify(ProbeOutcome::Timeout).expect("timeout is an error");
    assert_eq!(e.code(), NetCode::ConnTimeout);
}

#[test]
fn ok_outcome_classifies_as_none() {
    assert!(classify(ProbeOutcome::Ok).is_none());
}

#[test]
fn connection_refused_kind_maps_to_conn_refused() {
    let err = io::Error::from(io::ErrorKind::ConnectionRefused);
    assert_eq!(classify_io_error(&err), NetCode::ConnRefused);
}

#[test]
fn connection_reset_kind_maps_to_reset() {
    let err = io::Error::from(io::ErrorKind::ConnectionReset);
    assert_eq!(classify_io_error(&err), NetCode::Reset);
}

#[test]
fn broken_pipe_kind_maps_to_conn_eof() {
    let err = io::Error::from(io::ErrorKind::BrokenPipe);
    assert_eq!(classify_io_error(&err), NetCode::ConnEOF);
}

#[test]
fn unrecognized_kind_with_lookup_text_maps_to_addr_lookup() {
    let err = io::Error::new(io::ErrorKind::Other, "failed to lookup address information: temp");
    assert_eq!(classify_io_error(&err), NetCode::AddrLookup);
}

#[test]
fn unrecognized_error_falls_back_to_other_and_keeps_original_text() {
    let err = io::Error::new(io::ErrorKind::Other, "some custom relay hiccup");
    let classified = classify(ProbeOutcome::Io(err)).expect("error");
    assert_eq!(classified.code(), NetCode::Other);
    assert_eq!(classified.to_string(), "some custom relay hiccup");
}

#[test]
fn netcode_is_stable_for_the_same_error_message() {
    let a = io::Error::new(io::ErrorKind::ConnectionRefused, "refused once");
    let b = io::Error::new(io::ErrorKind::ConnectionRefused, "refused once");
    assert_eq!(classify_io_error(&a), classify_io_error(&b));
}

#[test]
fn equality_is_defined_purely_on_netcode_not_detail() {
    let a = classify(ProbeOutcome::Io(io::Error::new(io::ErrorKind::Other, "message one")))
        .expect("error");
    let b = classify(ProbeOutcome::Io(io::Error::new(io::ErrorKind::Other, "message two")))
        .expect("error");
    assert_eq!(a, b, "Other-coded errors compare equal regardless of wrapped text");
}

#[test]
fn non_other_codes_display_the_stable_code_text() {
    let e = classify(ProbeOutcome::Timeout).expect("error");
    assert_eq!(e.to_string(), "connection timeout");
}
