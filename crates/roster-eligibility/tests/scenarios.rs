//! Join scenarios as the membership service sees them.

use roster_eligibility::{
    audit_composition, can_join, can_join_roster, compute_available_slots, Eligibility, EligibilityResult,
    RestrictedTier, RosterMember, SlotAllocation, TierCounts, MISSING_TIER_REASON,
};

fn slots(t18: u32, t17: u32, t16: u32, t15: u32) -> SlotAllocation {
    compute_available_slots(&TierCounts::new(t18, t17, t16, t15))
}

fn alloc(slot18: u32, slot17: u32, slot16: u32, slot15: u32) -> SlotAllocation {
    SlotAllocation {
        slot18,
        slot17,
        slot16,
        slot15,
    }
}

#[test]
fn boundary_allocations() {
    assert_eq!(slots(0, 0, 0, 0), alloc(1, 2, 3, 4));
    assert_eq!(slots(1, 0, 0, 0), alloc(1, 1, 2, 3));
    assert_eq!(slots(1, 1, 1, 1), alloc(1, 1, 1, 1));
    assert_eq!(slots(0, 1, 1, 1), alloc(1, 2, 2, 2));
}

#[test]
fn boundary_decisions() {
    assert!(!can_join(Some(15), &TierCounts::new(1, 1, 1, 1)).is_allowed());
    assert!(can_join(Some(17), &TierCounts::new(0, 1, 1, 1)).is_allowed());
}

#[test]
fn empty_roster_admits_top_tier() {
    let roster: Vec<RosterMember> = Vec::new();
    assert!(can_join_roster(Some(18), &roster).is_allowed());
}

#[test]
fn second_top_tier_refused_with_cap() {
    let roster = vec![RosterMember::new(18)];
    let result = EligibilityResult::from(can_join_roster(Some(18), &roster));
    assert!(!result.allowed);
    assert!(result.reason.unwrap().contains("cap is 1"));
}

#[test]
fn third_tier_after_top_two_filled() {
    // slot16 = 1 + max(0, (1 + 0) - 1) = 1, no TH16 yet
    let roster = vec![RosterMember::new(18), RosterMember::new(17)];
    assert_eq!(
        can_join_roster(Some(16), &roster),
        Eligibility::Admitted {
            tier: RestrictedTier::Th16,
            used: 0,
            cap: 1,
        }
    );
}

#[test]
fn low_tier_admitted_into_full_roster() {
    let roster: Vec<RosterMember> = [18, 17, 16, 15, 15, 15]
        .into_iter()
        .map(RosterMember::new)
        .collect();
    assert!(can_join_roster(Some(10), &roster).is_allowed());
}

#[test]
fn unset_candidate_refused_regardless_of_roster() {
    for roster in [
        vec![],
        vec![RosterMember::new(9)],
        vec![RosterMember::new(18), RosterMember::unset()],
    ] {
        let result = EligibilityResult::from(can_join_roster(None, &roster));
        assert_eq!(
            result,
            EligibilityResult {
                allowed: false,
                reason: Some(MISSING_TIER_REASON.to_string()),
            }
        );
    }
}

#[test]
fn bottom_up_joins_pass_individually_but_fail_audit() {
    // Each join is checked against the roster at that moment; later
    // higher-tier joins take back credit the lower tiers already used
    let mut counts = TierCounts::default();
    for level in [15u8, 15, 15, 15, 16, 16, 16, 17, 17, 18] {
        assert!(
            can_join(Some(level), &counts).is_allowed(),
            "TH{level} refused at {counts:?}"
        );
        counts[RestrictedTier::from_level(level).unwrap()] += 1;
    }
    assert_eq!(counts.total(), 10);

    let violation = audit_composition(&counts).unwrap_err();
    let tiers: Vec<u8> = violation.overflows.iter().map(|o| o.tier).collect();
    assert_eq!(tiers, vec![17, 16, 15]);
}
