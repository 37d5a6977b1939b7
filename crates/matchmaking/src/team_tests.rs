use super::*;

#[test]
fn test_as_teams_groups_consecutive_players() {
    let teams = as_teams(&[3, 1, 0, 2]);
    let expected: MatchupSet = [Team::new(3, 1), Team::new(0, 2)].into_iter().collect();
    assert_eq!(teams, expected);
}

#[test]
fn test_as_teams_keeps_roles() {
    // (1, 0) and (0, 1) are different teams: roles are fixed by slot
    assert_ne!(as_teams(&[1, 0, 2, 3]), as_teams(&[0, 1, 2, 3]));
}

#[test]
fn test_as_teams_drops_unpaired_player() {
    let teams = as_teams(&[0, 1, 2]);
    assert_eq!(teams.len(), 1);
    assert!(teams.contains(&Team::new(0, 1)));
}

#[test]
fn test_solo_team() {
    let team = Team::solo("anna");
    assert!(team.is_solo());
    assert!(!Team::new("anna", "ben").is_solo());
}

#[test]
fn test_team_ratings_lookup() {
    let defense = [Rating::new(1.0, 0.1), Rating::new(2.0, 0.2)];
    let offense = [Rating::new(3.0, 0.3), Rating::new(4.0, 0.4)];
    let team = Team::new(1, 0).ratings(&defense, &offense);
    assert_eq!(team.defense, defense[1]);
    assert_eq!(team.offense, offense[0]);
}

#[test]
fn test_players_of() {
    let teams: MatchupSet = [(0, 1), (2, 3)].into_iter().map(Team::from).collect();
    assert_eq!(players_of(&teams), vec![0, 1, 2, 3]);
}
