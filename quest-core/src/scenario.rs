//! Fixed game data: the mansion layout, the suspect roster and the
//! clue → suspect association table. A scenario is plain serde data so
//! the reference mansion can be swapped for a JSON file without
//! touching the engine.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::map::Room;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to parse scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate room name in map: {name}")]
    DuplicateRoom { name: String },
    #[error("association references a suspect missing from the roster: {suspect}")]
    UnknownSuspect { suspect: String },
}

/// Layout of one room and, recursively, everything behind its exits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<RoomSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<RoomSpec>>,
}

impl RoomSpec {
    fn room(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            clue: None,
            left: None,
            right: None,
        }
    }

    fn clued(name: &str, clue: &str) -> Self {
        Self {
            clue: Some(clue.to_owned()),
            ..Self::room(name)
        }
    }

    fn branch(mut self, left: Option<RoomSpec>, right: Option<RoomSpec>) -> Self {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
        self
    }

    /// Builds the owned room tree for a session.
    pub fn build(&self) -> Room {
        let mut room = match &self.clue {
            Some(clue) => Room::with_clue(&self.name, clue),
            None => Room::new(&self.name),
        };
        if let Some(spec) = &self.left {
            room.set_left(spec.build());
        }
        if let Some(spec) = &self.right {
            room.set_right(spec.build());
        }
        room
    }

    fn collect_names<'a>(&'a self, seen: &mut HashSet<&'a str>) -> Result<(), ScenarioError> {
        if !seen.insert(self.name.as_str()) {
            return Err(ScenarioError::DuplicateRoom {
                name: self.name.clone(),
            });
        }
        if let Some(spec) = &self.left {
            spec.collect_names(seen)?;
        }
        if let Some(spec) = &self.right {
            spec.collect_names(seen)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub map: RoomSpec,
    /// Roster shown at accusation time. Empty for modes without a
    /// judgment phase.
    #[serde(default)]
    pub suspects: Vec<String>,
    /// Clue text → suspect name. Clues absent from this table have no
    /// lead behind them.
    #[serde(default)]
    pub associations: HashMap<String, String>,
}

impl Scenario {
    /// Loads and validates a scenario from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut seen = HashSet::new();
        self.map.collect_names(&mut seen)?;
        if !self.suspects.is_empty() {
            for suspect in self.associations.values() {
                if !self.suspects.iter().any(|s| s == suspect) {
                    return Err(ScenarioError::UnknownSuspect {
                        suspect: suspect.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn build_map(&self) -> Room {
        self.map.build()
    }

    pub fn suspect_for(&self, clue: &str) -> Option<&str> {
        self.associations.get(clue).map(String::as_str)
    }

    /// The seven-room mansion of the map-only walk: no clues, the
    /// stroll ends at the first dead end.
    pub fn mansion_tour() -> Self {
        Self {
            title: "Detective Quest".to_owned(),
            map: RoomSpec::room("Hall de Entrada").branch(
                Some(RoomSpec::room("Sala de Jantar").branch(
                    Some(RoomSpec::room("Cozinha")),
                    Some(RoomSpec::room("Despensa")),
                )),
                Some(RoomSpec::room("Biblioteca").branch(
                    Some(RoomSpec::room("Escritorio")),
                    Some(RoomSpec::room("Jardim Secreto")),
                )),
            ),
            suspects: Vec::new(),
            associations: HashMap::new(),
        }
    }

    /// The nine-room mansion of the clue hunt: every room carries a
    /// clue, all of them collectible.
    pub fn mansion_collect() -> Self {
        Self {
            title: "Detective Quest".to_owned(),
            map: RoomSpec::clued(
                "Hall de Entrada",
                "Um jornal velho sobre a mesa, com a data de 1920.",
            )
            .branch(
                Some(
                    RoomSpec::clued(
                        "Sala de Jantar",
                        "Restos de um banquete suntuoso, mas sem talheres.",
                    )
                    .branch(
                        Some(
                            RoomSpec::clued("Cozinha", "Uma faca de prata reluzente na pia.")
                                .branch(
                                    Some(RoomSpec::clued(
                                        "Quarto Principal",
                                        "Um relogio de bolso parado as 03:15.",
                                    )),
                                    None,
                                ),
                        ),
                        Some(
                            RoomSpec::clued(
                                "Despensa",
                                "Um frasco de veneno vazio e etiquetado como 'Raticida'.",
                            )
                            .branch(
                                None,
                                Some(RoomSpec::clued(
                                    "Banheiro",
                                    "Uma toalha molhada e suja de terra.",
                                )),
                            ),
                        ),
                    ),
                ),
                Some(
                    RoomSpec::clued(
                        "Biblioteca",
                        "Um livro de Sherlock Holmes aberto em uma pagina especifica.",
                    )
                    .branch(
                        Some(RoomSpec::clued(
                            "Escritorio",
                            "Cartas rasgadas revelam um desentendimento familiar.",
                        )),
                        Some(RoomSpec::clued(
                            "Jardim Secreto",
                            "Rastros de pegadas frescas no chao umido.",
                        )),
                    ),
                ),
            ),
            suspects: Vec::new(),
            associations: HashMap::new(),
        }
    }

    /// The full case: six rooms, five clues with a lead behind them
    /// (the hall's newspaper leads nowhere) and four suspects.
    pub fn mansion_investigate() -> Self {
        let associations = [
            (
                "Um candelabro de prata polido, fora do lugar.",
                "Mordomo",
            ),
            ("Pegadas de sapatos caros na lama.", "Dama_da_noite"),
            ("Uma faca de cozinha faltando no conjunto.", "Cozinheira"),
            ("Uma carta de ameaca enderecada a vitima.", "Dama_da_noite"),
            (
                "Um livro sobre venenos com uma pagina marcada.",
                "Mordomo",
            ),
        ]
        .into_iter()
        .map(|(clue, suspect)| (clue.to_owned(), suspect.to_owned()))
        .collect();

        Self {
            title: "Detective Quest".to_owned(),
            map: RoomSpec::clued(
                "Hall de Entrada",
                "Um jornal velho sobre a mesa, com a data de 1920.",
            )
            .branch(
                Some(
                    RoomSpec::clued(
                        "Sala de Jantar",
                        "Um candelabro de prata polido, fora do lugar.",
                    )
                    .branch(
                        Some(RoomSpec::clued(
                            "Cozinha",
                            "Uma faca de cozinha faltando no conjunto.",
                        )),
                        None,
                    ),
                ),
                Some(
                    RoomSpec::clued(
                        "Biblioteca",
                        "Um livro sobre venenos com uma pagina marcada.",
                    )
                    .branch(
                        Some(RoomSpec::clued(
                            "Escritorio",
                            "Uma carta de ameaca enderecada a vitima.",
                        )),
                        Some(RoomSpec::clued(
                            "Jardim Secreto",
                            "Pegadas de sapatos caros na lama.",
                        )),
                    ),
                ),
            ),
            suspects: vec![
                "Mordomo".to_owned(),
                "Jardineiro".to_owned(),
                "Cozinheira".to_owned(),
                "Dama_da_noite".to_owned(),
            ],
            associations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Direction;

    #[test]
    fn builtin_scenarios_validate() {
        for scenario in [
            Scenario::mansion_tour(),
            Scenario::mansion_collect(),
            Scenario::mansion_investigate(),
        ] {
            scenario.validate().unwrap();
        }
    }

    #[test]
    fn builtin_room_counts() {
        assert_eq!(Scenario::mansion_tour().build_map().room_count(), 7);
        assert_eq!(Scenario::mansion_collect().build_map().room_count(), 9);
        assert_eq!(Scenario::mansion_investigate().build_map().room_count(), 6);
    }

    #[test]
    fn investigate_map_matches_the_case_layout() {
        let map = Scenario::mansion_investigate().build_map();
        assert_eq!(map.name(), "Hall de Entrada");
        let jantar = map.child(Direction::Left).unwrap();
        assert_eq!(jantar.name(), "Sala de Jantar");
        assert_eq!(
            jantar.child(Direction::Left).unwrap().name(),
            "Cozinha"
        );
        assert!(jantar.child(Direction::Right).is_none());
        let biblioteca = map.child(Direction::Right).unwrap();
        assert_eq!(
            biblioteca.child(Direction::Left).unwrap().name(),
            "Escritorio"
        );
        assert_eq!(
            biblioteca.child(Direction::Right).unwrap().name(),
            "Jardim Secreto"
        );
    }

    #[test]
    fn association_table_has_the_five_leads() {
        let scenario = Scenario::mansion_investigate();
        assert_eq!(scenario.associations.len(), 5);
        assert_eq!(
            scenario.suspect_for("Pegadas de sapatos caros na lama."),
            Some("Dama_da_noite")
        );
        // The hall's newspaper has no lead behind it.
        assert_eq!(
            scenario.suspect_for("Um jornal velho sobre a mesa, com a data de 1920."),
            None
        );
    }

    #[test]
    fn scenario_round_trips_through_json() {
        let scenario = Scenario::mansion_investigate();
        let json = serde_json::to_string(&scenario).unwrap();
        let back = Scenario::from_json(&json).unwrap();
        assert_eq!(back.build_map().room_count(), 6);
        assert_eq!(back.suspects, scenario.suspects);
    }

    #[test]
    fn duplicate_room_names_are_rejected() {
        let json = r#"{
            "title": "bad",
            "map": {
                "name": "Hall",
                "left": { "name": "Hall" }
            }
        }"#;
        match Scenario::from_json(json) {
            Err(ScenarioError::DuplicateRoom { name }) => assert_eq!(name, "Hall"),
            other => panic!("expected duplicate room error, got {other:?}"),
        }
    }

    #[test]
    fn association_to_unknown_suspect_is_rejected() {
        let json = r#"{
            "title": "bad",
            "map": { "name": "Hall", "clue": "luva" },
            "suspects": ["Mordomo"],
            "associations": { "luva": "Fantasma" }
        }"#;
        match Scenario::from_json(json) {
            Err(ScenarioError::UnknownSuspect { suspect }) => assert_eq!(suspect, "Fantasma"),
            other => panic!("expected unknown suspect error, got {other:?}"),
        }
    }
}
