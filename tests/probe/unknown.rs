// Tests for the probe used on targets with no platform branch.

use corecount::probe::{Probe, UnknownProbe};

#[test]
fn unknown_target_logical_is_exactly_one() {
    assert_eq!(UnknownProbe.logical(), 1);
}

#[test]
fn unknown_target_physical_is_exactly_one() {
    assert_eq!(UnknownProbe.physical(), 1);
}

#[test]
fn unknown_target_has_no_physical_source() {
    assert!(UnknownProbe.detect_physical().is_err());
}
