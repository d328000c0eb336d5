use namebrawl_core::battle::CombatantDefect;
use namebrawl_core::env::{RollKind, compute_seed};
use namebrawl_core::{
    Battle, BattleConfig, BattleEnd, BattleError, BattleReport, Character, CharacterClass,
    CharacterId, Env, HexColor, Replay, RngOracle, Sha256Digest, Side, Stats, TimeoutPolicy,
    generate, simulate, simulate_with,
};
use proptest::prelude::*;

/// Returns the same value for every seed.
struct FixedRoll(u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Roll that fails every check below 100%.
const NEVER: FixedRoll = FixedRoll(9_999);
/// Roll that passes every check above 0%.
const ALWAYS: FixedRoll = FixedRoll(0);

fn base_character(id: &str, name: &str, class: CharacterClass) -> Character {
    Character {
        id: CharacterId::new(id).unwrap(),
        name: name.to_owned(),
        class,
        stats: class.base_stats(),
        color: HexColor::new(0, 0, 0),
        hash: format!("{id}00000000"),
    }
}

fn run(
    first: &Character,
    second: &Character,
    rng: &FixedRoll,
    config: &BattleConfig,
) -> BattleReport {
    let env = Env::with_all(&Sha256Digest, rng).as_game_env();
    simulate_with(first, second, &env, config, 0).unwrap()
}

#[test]
fn warrior_vs_mage_without_procs_is_a_mage_win_on_turn_19() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);

    let report = run(&warrior, &mage, &NEVER, &BattleConfig::default());

    // speeds 8 vs 10 with threshold 1000; ties at t=500 and t=1000 go to the mage
    let expected_actors = [
        "M", "W", "M", "W", "M", "W", "M", "M", "W", "M", "W", "M", "W", "M", "W", "M", "M",
        "W", "M",
    ];
    let actors: Vec<&str> = report
        .turn_entries()
        .iter()
        .map(|entry| if entry.attacker_id == mage.id { "M" } else { "W" })
        .collect();
    assert_eq!(actors, expected_actors);

    for entry in report.turn_entries() {
        assert!(!entry.is_skill && !entry.is_crit && !entry.is_dodge);
        if entry.attacker_id == mage.id {
            assert_eq!(entry.damage, 14);
            assert_eq!(entry.message, "Mage hit Warrior for 14 damage!");
        } else {
            assert_eq!(entry.damage, 12);
            assert_eq!(entry.message, "Warrior hit Mage for 12 damage!");
        }
    }

    assert_eq!(report.log.len(), 20);
    assert_eq!(report.turns, 19);
    assert_eq!(report.end, BattleEnd::Knockout);
    assert_eq!(report.winner, Side::Second);
    assert_eq!(report.winner_id, mage.id);
    assert_eq!(report.final_hp, [-4, 4]);

    let last = report.log.last().unwrap();
    assert_eq!(last.turn, 20);
    assert_eq!(last.message, "Mage WINS!");
    assert!(last.attacker_id.is_system() && last.defender_id.is_system());
    assert_eq!(last.damage, 0);
}

#[test]
fn replay_tracks_displayed_hp() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);
    let report = run(&warrior, &mage, &NEVER, &BattleConfig::default());

    let frames: Vec<_> = Replay::new(&report.log, &warrior, &mage).collect();
    assert_eq!(frames.len(), report.log.len());
    assert_eq!(frames[0].hp, [136, 100]);
    assert_eq!(frames[1].hp, [136, 88]);
    // overkill is clamped for display
    assert_eq!(frames.last().unwrap().hp, [0, 4]);
}

#[test]
fn mirror_match_replay_charges_the_first_combatant() {
    let trae = generate("Trae");
    let report = simulate(&trae, &trae, 5).unwrap();

    let mut replay = Replay::new(&report.log, &trae, &trae);
    replay.by_ref().for_each(drop);
    let [first, second] = replay.hp();

    assert_eq!(second, trae.stats.hp);
    let dealt: u32 = report.log.iter().map(|entry| entry.damage).sum();
    let expected = (trae.stats.hp - i32::try_from(dealt).unwrap()).max(0);
    assert_eq!(first, expected);
}

#[test]
fn always_casting_runs_into_the_log_cap() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);

    let report = run(&warrior, &mage, &ALWAYS, &BattleConfig::default());

    assert_eq!(report.log.len(), BattleConfig::DEFAULT_MAX_LOG_ENTRIES);
    assert_eq!(report.turns, 199);
    assert_eq!(report.end, BattleEnd::TimedOut);
    assert!(report.turn_entries().iter().all(|entry| entry.is_skill && entry.damage == 0));
    assert_eq!(report.final_hp, [150, 100]);
    // higher HP wins a timeout
    assert_eq!(report.winner_id, warrior.id);

    let first = &report.log[0];
    assert_eq!(first.message, "Mage cast Weaken! Warrior's Attack weakened!");
    assert_eq!(first.skill_name.as_deref(), Some("Weaken"));
    assert_eq!(first.attacker_id, mage.id);
    assert_eq!(first.defender_id, warrior.id);
    // all three checks pass with a zero roll: the tie goes to the first combatant
    let tie_turn = &report.log[7];
    assert_eq!(tie_turn.message, "Warrior used Fortify! Defense UP!");
}

#[test]
fn timeout_policy_picks_the_first_combatant_when_asked() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);

    let config = BattleConfig::default().with_timeout_policy(TimeoutPolicy::FirstCombatant);
    let report = run(&mage, &warrior, &ALWAYS, &config);
    assert_eq!(report.end, BattleEnd::TimedOut);
    assert_eq!(report.winner_id, mage.id);

    let report = run(&mage, &warrior, &ALWAYS, &BattleConfig::default());
    assert_eq!(report.winner_id, warrior.id);
}

#[test]
fn hp_tie_on_timeout_goes_to_the_first_combatant() {
    let a = base_character("aaaaaaaa", "Left", CharacterClass::Rogue);
    let b = base_character("bbbbbbbb", "Right", CharacterClass::Rogue);

    let config = BattleConfig::default().with_max_log_entries(10);
    let report = run(&a, &b, &ALWAYS, &config);
    assert_eq!(report.log.len(), 10);
    assert_eq!(report.winner_id, a.id);
    assert_eq!(report.log.last().unwrap().message, "Left WINS!");
}

#[test]
fn crits_and_dodges_follow_the_rolls() {
    let rogue = base_character("aaaaaaaa", "Rogue", CharacterClass::Rogue);
    let mut statue = base_character("bbbbbbbb", "Statue", CharacterClass::Warrior);
    statue.stats = Stats::uniform_hp(1_000, 0, 0, 0);

    let config = BattleConfig::default()
        .with_skill_chance(0)
        .with_max_log_entries(12);
    let report = run(&rogue, &statue, &ALWAYS, &config);

    for entry in report.turn_entries() {
        if entry.attacker_id == rogue.id {
            // 18 raw, crit x1.5; a speed-0 target never dodges
            assert_eq!(entry.damage, 27);
            assert!(entry.is_crit && !entry.is_dodge);
            assert_eq!(entry.message, "Rogue hit Statue for 27 damage! (CRITICAL!)");
        } else {
            // attack 0 floors to 0, but the rogue dodges every roll of 0 anyway
            assert!(entry.is_dodge && entry.is_crit);
            assert_eq!(entry.damage, 0);
            assert_eq!(entry.message, "Rogue dodged Statue's attack!");
        }
    }
}

/// Passes only the listed seeds; every other roll fails.
struct Scripted(Vec<u64>);

impl RngOracle for Scripted {
    fn next_u32(&self, seed: u64) -> u32 {
        if self.0.contains(&seed) { 0 } else { 9_999 }
    }
}

fn damage_by(report: &BattleReport, id: CharacterId) -> Vec<u32> {
    report
        .turn_entries()
        .iter()
        .filter(|entry| entry.attacker_id == id && !entry.is_skill)
        .map(|entry| entry.damage)
        .collect()
}

#[test]
fn focus_raises_attack_for_three_of_the_casters_turns() {
    let rogue = base_character("cccccccc", "Rogue", CharacterClass::Rogue);
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);

    // only the rogue's turn-1 skill check succeeds
    let rng = Scripted(vec![compute_seed(0, 1, 0, RollKind::Skill)]);
    let env = Env::with_all(&Sha256Digest, &rng).as_game_env();
    let config = BattleConfig::default().with_max_log_entries(8);
    let report = simulate_with(&rogue, &warrior, &env, &config, 0).unwrap();

    let first = &report.log[0];
    assert!(first.is_skill);
    assert_eq!(first.message, "Rogue used Focus! Attack UP!");

    // turns: R(skill) W R R W R R; Focus expires when ticked on the rogue's
    // third turn after the cast
    assert_eq!(damage_by(&report, rogue.id), [15, 15, 10, 10]);
    assert_eq!(damage_by(&report, warrior.id), [10, 10]);
}

#[test]
fn weaken_lowers_the_opponents_attack_until_it_ticks_out() {
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);

    let rng = Scripted(vec![compute_seed(0, 1, 1, RollKind::Skill)]);
    let env = Env::with_all(&Sha256Digest, &rng).as_game_env();
    let config = BattleConfig::default().with_max_log_entries(7);
    let report = simulate_with(&warrior, &mage, &env, &config, 0).unwrap();

    assert_eq!(
        report.log[0].message,
        "Mage cast Weaken! Warrior's Attack weakened!"
    );
    assert_eq!(report.log[0].defender_id, warrior.id);
    // turns: M(skill) W M W M W; the debuff ticks on the warrior's own turns
    assert_eq!(damage_by(&report, warrior.id), [7, 7, 12]);
    assert_eq!(damage_by(&report, mage.id), [14, 14]);
}

#[test]
fn invalid_stats_are_rejected() {
    let trae = generate("Trae");
    let mut broken = generate("Bug");
    broken.stats.speed = -1;

    let err = simulate(&trae, &broken, 1).unwrap_err();
    assert!(matches!(
        err,
        BattleError::InvalidCombatant {
            defect: CombatantDefect::NegativeStat("speed"),
            ..
        }
    ));

    broken.stats = Stats::new(200, 100, 10, 10, 10);
    assert!(simulate(&broken, &trae, 1).is_err());
}

#[test]
fn stepping_exposes_live_state() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);
    let env = Env::with_all(&Sha256Digest, &NEVER).as_game_env();
    let config = BattleConfig::default();

    let mut battle = Battle::new(&warrior, &mage, &env, &config, 0).unwrap();
    let entry = battle.step().unwrap().clone();
    assert_eq!(entry.turn, 1);
    assert_eq!(entry.attacker_id, mage.id);
    assert_eq!(battle.combatant(Side::First).current_hp, 136);
    assert_eq!(battle.combatant(Side::Second).name(), "Mage");
    assert_eq!(battle.turn(), 1);
    assert_eq!(battle.seed(), 0);
    assert_eq!(battle.config(), &config);
    assert_eq!(battle.log(), std::slice::from_ref(&entry));
    assert!(!battle.is_finished());

    // the mage fills first at t=100 and pays its whole gauge
    let timeline = battle.timeline();
    assert_eq!(timeline.elapsed(), 100.0);
    assert_eq!(timeline.gauge(Side::First), 800);
    assert_eq!(timeline.gauge(Side::Second), 0);
}

#[test]
fn log_cap_below_two_still_leaves_room_for_one_turn() {
    let warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    let mage = base_character("bbbbbbbb", "Mage", CharacterClass::Mage);
    let config = BattleConfig {
        max_log_entries: 0,
        ..BattleConfig::default()
    };

    let report = run(&warrior, &mage, &NEVER, &config);
    assert_eq!(report.log.len(), 2);
    assert_eq!(report.turns, 1);
    assert_eq!(report.end, BattleEnd::TimedOut);
}

#[test]
fn buffs_on_maximal_attack_saturate() {
    let mut rogue = base_character("cccccccc", "Rogue", CharacterClass::Rogue);
    rogue.stats = Stats::uniform_hp(100, i32::MAX, 0, 15);
    let mut warrior = base_character("aaaaaaaa", "Warrior", CharacterClass::Warrior);
    warrior.stats = Stats::uniform_hp(1_000, 1, 0, 8);

    // rogue casts Focus on turn 1, takes a hit on turn 2, then swings
    let rng = Scripted(vec![compute_seed(0, 1, 0, RollKind::Skill)]);
    let env = Env::with_all(&Sha256Digest, &rng).as_game_env();
    let report = simulate_with(&rogue, &warrior, &env, &BattleConfig::default(), 0).unwrap();

    assert!(report.log[0].is_skill);
    assert_eq!(report.log[1].damage, 1);
    assert_eq!(report.log[2].attacker_id, rogue.id);
    assert_eq!(report.log[2].damage, i32::MAX.unsigned_abs());
    assert_eq!(report.end, BattleEnd::Knockout);
    assert_eq!(report.winner_id, rogue.id);
    assert_eq!(report.log.len(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn fingerprint_is_stable_per_seed() {
    let (trae, bug) = (generate("Trae"), generate("Bug"));
    let a = simulate(&trae, &bug, 42).unwrap();
    let b = simulate(&trae, &bug, 42).unwrap();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

    let other = simulate(&trae, &bug, 43).unwrap();
    if other.log != a.log {
        assert_ne!(other.fingerprint().unwrap(), a.fingerprint().unwrap());
    }
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z ]{1,16}", any::<String>()]
}

proptest! {
    #[test]
    fn battles_terminate_with_a_consistent_winner(a in name(), b in name(), seed in any::<u64>()) {
        let (first, second) = (generate(&a), generate(&b));
        let report = simulate(&first, &second, seed).unwrap();

        prop_assert!(report.log.len() <= BattleConfig::DEFAULT_MAX_LOG_ENTRIES);
        prop_assert!(report.log.len() >= 2);

        let last = report.log.last().unwrap();
        prop_assert!(last.is_system());
        let winner = if report.winner == Side::First { &first } else { &second };
        prop_assert_eq!(report.winner_id, winner.id);
        prop_assert_eq!(&last.message, &format!("{} WINS!", winner.name));

        match report.end {
            BattleEnd::Knockout => {
                prop_assert!(report.final_hp.iter().any(|hp| *hp <= 0));
                prop_assert!(report.final_hp(report.winner) > 0);
            }
            BattleEnd::TimedOut => {
                prop_assert!(report.final_hp.iter().all(|hp| *hp > 0));
                prop_assert_eq!(report.log.len(), BattleConfig::DEFAULT_MAX_LOG_ENTRIES);
            }
        }
    }

    #[test]
    fn entries_respect_damage_rules(a in name(), b in name(), seed in any::<u64>()) {
        let (first, second) = (generate(&a), generate(&b));
        let report = simulate(&first, &second, seed).unwrap();

        for entry in report.turn_entries() {
            prop_assert!(!entry.attacker_id.is_system());
            if entry.is_skill || entry.is_dodge {
                prop_assert_eq!(entry.damage, 0);
            }
            if entry.is_skill {
                prop_assert!(entry.skill_name.is_some());
                prop_assert!(!entry.is_crit && !entry.is_dodge);
            }
        }
    }

    #[test]
    fn same_seed_same_battle(a in name(), b in name(), seed in any::<u64>()) {
        let (first, second) = (generate(&a), generate(&b));
        prop_assert_eq!(
            simulate(&first, &second, seed).unwrap(),
            simulate(&first, &second, seed).unwrap()
        );
    }
}
