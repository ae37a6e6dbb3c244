// src/specs/shots.rs
//! Page shape for FotMob match pages.
//!
//! The page is a Next.js app: all match data sits in the JSON payload of
//! `<script id="__NEXT_DATA__">`. We need three parts of it:
//! - `props.pageProps.content.shotmap.shots` – one object per shot,
//! - `props.pageProps.general` – home team id, league name and round,
//! - `props.pageProps.header.teams` – `[home, away]` names and scores.
//!
//! Shots are kept in their original order. Coordinates are on a 105×68 pitch
//! with every team attacking to the right; `pitch_x/pitch_y` mirror the home
//! side so it attacks to the left, which puts both teams on one diagram.

use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::{PITCH_LENGTH, PITCH_WIDTH};
use crate::data::DataSet;
use crate::error::{Result, ScrapeError};

pub const SHOT_FIELDS: [&str; 18] = [
    "id", "minute", "team_id", "team", "side", "player",
    "event_type", "situation", "shot_type", "is_own_goal", "is_on_target",
    "x", "y", "pitch_x", "pitch_y", "expected_goals", "xg_imputed", "marker",
];

#[derive(Clone, Debug, PartialEq)]
pub struct MatchInfo {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    pub home_team_id: i64,
    pub league_name: String,
    pub league_round: String,
}

impl MatchInfo {
    /// `"Arsenal 2-1 Chelsea"`
    pub fn title(&self) -> String {
        format!("{} {}-{} {}", self.home_team, self.home_score, self.away_score, self.away_team)
    }

    /// `"Premier League | Round 7"`
    pub fn league_title(&self) -> String {
        join!(&self.league_name, " | ", &self.league_round)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self { Side::Home => "home", Side::Away => "away" }
    }
}

/// How a shot is drawn on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotMarker {
    Goal,
    OwnGoal,
    PenaltyGoal,
    Shot,
}

impl ShotMarker {
    pub fn classify(event_type: &str, situation: &str, is_own_goal: bool) -> Self {
        match (event_type, situation, is_own_goal) {
            ("Goal", _, true) => ShotMarker::OwnGoal,
            ("Goal", "Penalty", false) => ShotMarker::PenaltyGoal,
            ("Goal", _, false) => ShotMarker::Goal,
            _ => ShotMarker::Shot,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShotMarker::Goal => "goal",
            ShotMarker::OwnGoal => "own_goal",
            ShotMarker::PenaltyGoal => "penalty_goal",
            ShotMarker::Shot => "shot",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shot {
    pub id: Option<i64>,
    pub minute: Option<i64>,
    pub team_id: i64,
    pub side: Side,
    pub player: String,
    pub event_type: String,
    pub situation: String,
    pub shot_type: String,
    pub is_own_goal: bool,
    pub is_on_target: Option<bool>,
    pub x: f64,
    pub y: f64,
    pub expected_goals: Option<f64>,
    pub xg_imputed: bool,
}

impl Shot {
    /// Diagram coordinates: home shots mirrored onto the left half.
    pub fn pitch_xy(&self) -> (f64, f64) {
        match self.side {
            Side::Home => (PITCH_LENGTH - self.x, PITCH_WIDTH - self.y),
            Side::Away => (self.x, self.y),
        }
    }

    pub fn marker(&self) -> ShotMarker {
        ShotMarker::classify(&self.event_type, &self.situation, self.is_own_goal)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchData {
    pub info: MatchInfo,
    pub shots: Vec<Shot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShot {
    #[serde(default)]
    id: Option<i64>,
    event_type: String,
    team_id: i64,
    #[serde(default)]
    player_name: Option<String>,
    x: f64,
    y: f64,
    #[serde(default)]
    min: Option<i64>,
    #[serde(default)]
    situation: Option<String>,
    #[serde(default)]
    shot_type: Option<String>,
    #[serde(default)]
    is_own_goal: Option<bool>,
    #[serde(default)]
    is_on_target: Option<bool>,
    #[serde(default)]
    expected_goals: Option<f64>,
}

const SHOTS_PATH: &str = "/props/pageProps/content/shotmap/shots";
const GENERAL_PATH: &str = "/props/pageProps/general";
const TEAMS_PATH: &str = "/props/pageProps/header/teams";

/// Pull the `__NEXT_DATA__` payload out of a match page and read the shot map.
pub fn parse_match_page(html: &str) -> Result<MatchData> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(r#"script#__NEXT_DATA__"#)?;
    let script = doc
        .select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::no_match_data("script#__NEXT_DATA__"))?;
    let payload: Value = serde_json::from_str(&script.text().collect::<String>())?;
    parse_match_json(&payload)
}

pub fn parse_match_json(payload: &Value) -> Result<MatchData> {
    let info = read_match_info(payload)?;

    let shots = payload
        .pointer(SHOTS_PATH)
        .ok_or_else(|| ScrapeError::no_match_data(SHOTS_PATH))?;
    let raw: Vec<RawShot> = serde_json::from_value(shots.clone())?;

    let mut shots: Vec<Shot> = raw
        .into_iter()
        .map(|r| Shot {
            id: r.id,
            minute: r.min,
            team_id: r.team_id,
            side: if r.team_id == info.home_team_id { Side::Home } else { Side::Away },
            player: r.player_name.unwrap_or_default(),
            event_type: r.event_type,
            situation: r.situation.unwrap_or_default(),
            shot_type: r.shot_type.unwrap_or_default(),
            is_own_goal: r.is_own_goal.unwrap_or(false),
            is_on_target: r.is_on_target,
            x: r.x,
            y: r.y,
            expected_goals: r.expected_goals,
            xg_imputed: false,
        })
        .collect();

    impute_expected_goals(&mut shots);
    Ok(MatchData { info, shots })
}

fn read_match_info(payload: &Value) -> Result<MatchInfo> {
    let general = payload
        .pointer(GENERAL_PATH)
        .ok_or_else(|| ScrapeError::no_match_data(GENERAL_PATH))?;
    let teams = payload
        .pointer(TEAMS_PATH)
        .and_then(Value::as_array)
        .filter(|t| t.len() >= 2)
        .ok_or_else(|| ScrapeError::no_match_data(TEAMS_PATH))?;

    let str_at = |v: &Value, ptr: &str, ctx: &str| -> Result<String> {
        v.pointer(ptr)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ScrapeError::no_match_data(join!(ctx, ptr)))
    };
    let int_at = |v: &Value, ptr: &str, ctx: &str| -> Result<i64> {
        v.pointer(ptr)
            .and_then(Value::as_i64)
            .ok_or_else(|| ScrapeError::no_match_data(join!(ctx, ptr)))
    };

    Ok(MatchInfo {
        home_team: str_at(&teams[0], "/name", "header.teams[0]")?,
        away_team: str_at(&teams[1], "/name", "header.teams[1]")?,
        home_score: int_at(&teams[0], "/score", "header.teams[0]")?,
        away_score: int_at(&teams[1], "/score", "header.teams[1]")?,
        home_team_id: int_at(general, "/homeTeam/id", "general")?,
        league_name: str_at(general, "/leagueName", "general")?,
        league_round: str_at(general, "/leagueRoundName", "general")?,
    })
}

/// Fill missing xG with the median of the known values.
fn impute_expected_goals(shots: &mut [Shot]) {
    let known: Vec<f64> = shots.iter().filter_map(|s| s.expected_goals).collect();
    let Some(fill) = median(known) else { return };
    for shot in shots.iter_mut().filter(|s| s.expected_goals.is_none()) {
        shot.expected_goals = Some(fill);
        shot.xg_imputed = true;
    }
}

/// Median; the mean of the two middle values for an even count.
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// One row per shot, `SHOT_FIELDS` order.
pub fn to_dataset(data: &MatchData) -> DataSet {
    let team_name = |side: Side| match side {
        Side::Home => data.info.home_team.clone(),
        Side::Away => data.info.away_team.clone(),
    };
    let opt = |v: Option<String>| v.unwrap_or_default();

    let rows = data
        .shots
        .iter()
        .map(|shot| {
            let (px, py) = shot.pitch_xy();
            vec![
                opt(shot.id.map(|v| v.to_string())),
                opt(shot.minute.map(|v| v.to_string())),
                shot.team_id.to_string(),
                team_name(shot.side),
                s!(shot.side.as_str()),
                shot.player.clone(),
                shot.event_type.clone(),
                shot.situation.clone(),
                shot.shot_type.clone(),
                shot.is_own_goal.to_string(),
                opt(shot.is_on_target.map(|v| v.to_string())),
                shot.x.to_string(),
                shot.y.to_string(),
                px.to_string(),
                py.to_string(),
                opt(shot.expected_goals.map(|v| v.to_string())),
                shot.xg_imputed.to_string(),
                s!(shot.marker().as_str()),
            ]
        })
        .collect();

    DataSet::new(SHOT_FIELDS.iter().map(|s| s.to_string()).collect(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../../tests/fixtures/fotmob_match.html");

    #[test]
    fn reads_match_info() {
        let data = parse_match_page(PAGE).unwrap();
        assert_eq!(data.info.title(), "Arsenal 2-1 Chelsea");
        assert_eq!(data.info.league_title(), "Premier League | Round 7");
        assert_eq!(data.info.home_team_id, 9825);
        assert_eq!(data.shots.len(), 5);
    }

    #[test]
    fn missing_xg_takes_median() {
        let data = parse_match_page(PAGE).unwrap();
        // known: 0.79, 0.05, 0.12, 0.3 → median 0.21
        let imputed: Vec<&Shot> = data.shots.iter().filter(|s| s.xg_imputed).collect();
        assert_eq!(imputed.len(), 1);
        let xg = imputed[0].expected_goals.unwrap();
        assert!((xg - 0.21).abs() < 1e-9);
        assert!(data.shots.iter().all(|s| s.expected_goals.is_some()));
    }

    #[test]
    fn classifies_and_mirrors() {
        let data = parse_match_page(PAGE).unwrap();
        let markers: Vec<&str> = data.shots.iter().map(|s| s.marker().as_str()).collect();
        assert_eq!(markers, vec!["penalty_goal", "shot", "goal", "own_goal", "shot"]);

        let home = &data.shots[0];
        assert_eq!(home.side, Side::Home);
        assert_eq!(home.pitch_xy(), (105.0 - 94.0, 68.0 - 34.0));

        let away = &data.shots[2];
        assert_eq!(away.side, Side::Away);
        assert_eq!(away.pitch_xy(), (away.x, away.y));
    }

    #[test]
    fn dataset_rows_follow_fields() {
        let data = parse_match_page(PAGE).unwrap();
        let ds = to_dataset(&data);
        assert_eq!(ds.headers.len(), SHOT_FIELDS.len());
        assert!(ds.rows.iter().all(|r| r.len() == SHOT_FIELDS.len()));
        assert_eq!(ds.column_values("team").unwrap()[0], "Arsenal");
        assert_eq!(ds.column_values("team").unwrap()[2], "Chelsea");
        assert_eq!(ds.column_values("xg_imputed").unwrap()[1], "true");
    }

    #[test]
    fn median_odd_even_empty() {
        assert_eq!(median(vec![]), None);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn no_known_xg_leaves_values_empty() {
        let payload: Value = serde_json::json!({
            "props": { "pageProps": {
                "general": { "homeTeam": { "id": 1 }, "leagueName": "L", "leagueRoundName": "R" },
                "header": { "teams": [ { "name": "A", "score": 0 }, { "name": "B", "score": 0 } ] },
                "content": { "shotmap": { "shots": [
                    { "eventType": "Miss", "teamId": 1, "x": 90.0, "y": 30.0, "expectedGoals": null }
                ] } }
            } }
        });
        let data = parse_match_json(&payload).unwrap();
        assert_eq!(data.shots[0].expected_goals, None);
        assert!(!data.shots[0].xg_imputed);
    }

    #[test]
    fn missing_script_or_paths() {
        let err = parse_match_page("<html><body>nothing</body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::NoMatchData { .. }));

        let payload = serde_json::json!({ "props": { "pageProps": {} } });
        match parse_match_json(&payload) {
            Err(ScrapeError::NoMatchData { missing }) => assert_eq!(missing, GENERAL_PATH),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
