//! Exploration engine: a cursor over the mansion map driven by player
//! commands, collecting clues into the index (and, in the full case,
//! into the suspect lookup) as rooms are entered.

use std::collections::{HashMap, VecDeque};
use std::io::{self, BufRead, Write};

use crate::clues::ClueIndex;
use crate::lookup::SuspectLookup;
use crate::map::{Direction, Room};
use crate::scenario::Scenario;
use crate::QuestError;

/// One parsed player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Exit,
}

impl Command {
    /// "e"/"E" = esquerda, "d"/"D" = direita, "s"/"S" = sair.
    pub fn parse(token: &str) -> Option<Command> {
        match token.trim() {
            "e" | "E" => Some(Command::Go(Direction::Left)),
            "d" | "D" => Some(Command::Go(Direction::Right)),
            "s" | "S" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Where player tokens come from. The binary wires stdin; tests feed
/// a scripted sequence so the engine runs without a console.
pub trait InputSource {
    /// Next raw token, or `None` once the stream is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// One whitespace-trimmed line per token.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

/// Pre-recorded token sequence.
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }
}

/// The three game variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Map walk only; reaching a dead end ends the stroll.
    Tour,
    /// Every non-empty clue is indexed on entry.
    Collect,
    /// Clues are resolved against the suspect associations; only
    /// clues with a lead are kept, and a collected room is emptied.
    Investigate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    InRoom,
    Exited,
}

/// Outcome of one applied command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Entered,
    Blocked(Direction),
    Invalid,
    Exited,
}

/// A single play-through: owns the map and the evidence structures.
pub struct Session {
    map: Room,
    mode: GameMode,
    /// Cursor as the root-relative path; the owned tree needs no
    /// parent links and the path only ever grows (no way back).
    path: Vec<Direction>,
    clues: ClueIndex,
    lookup: SuspectLookup,
    associations: HashMap<String, String>,
    state: SessionState,
    /// Collect mode: suppresses repeated discovery messages while the
    /// player stands in the same room.
    clue_announced: bool,
}

impl Session {
    pub fn new(scenario: &Scenario, mode: GameMode) -> Self {
        Self {
            map: scenario.build_map(),
            mode,
            path: Vec::new(),
            clues: ClueIndex::new(),
            lookup: SuspectLookup::default(),
            associations: scenario.associations.clone(),
            state: SessionState::InRoom,
            clue_announced: false,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn lookup(&self) -> &SuspectLookup {
        &self.lookup
    }

    pub fn current_room(&self) -> &Room {
        let mut room = &self.map;
        for &dir in &self.path {
            room = room.child(dir).expect("cursor path stays inside the map");
        }
        room
    }

    fn current_room_mut(&mut self) -> &mut Room {
        let mut room = &mut self.map;
        for &dir in &self.path {
            room = room
                .child_mut(dir)
                .expect("cursor path stays inside the map");
        }
        room
    }

    /// Handles the current room's clue. Returns the clue text when
    /// this call collected (or, in collect mode, announced) it;
    /// `None` means there was nothing new here.
    pub fn inspect(&mut self) -> Option<String> {
        match self.mode {
            GameMode::Tour => None,
            GameMode::Collect => {
                if self.clue_announced {
                    return None;
                }
                let clue = self.current_room().clue()?.to_owned();
                self.clues.insert(&clue);
                self.clue_announced = true;
                tracing::debug!(clue = %clue, "clue indexed");
                Some(clue)
            }
            GameMode::Investigate => {
                let clue = self.current_room().clue()?.to_owned();
                // A clue with no lead behind it is left in place and
                // never collected.
                let suspect = self.associations.get(&clue)?.clone();
                self.current_room_mut().take_clue();
                self.clues.insert(&clue);
                self.lookup.insert(clue.clone(), suspect.clone());
                tracing::debug!(clue = %clue, suspect = %suspect, "clue collected");
                Some(clue)
            }
        }
    }

    /// Applies one command. The cursor only moves toward an existing
    /// child; everything else leaves it where it is.
    pub fn apply(&mut self, command: Command) -> Move {
        match command {
            Command::Exit => {
                self.state = SessionState::Exited;
                tracing::debug!("player left the mansion");
                Move::Exited
            }
            Command::Go(dir) => {
                if self.current_room().child(dir).is_none() {
                    return Move::Blocked(dir);
                }
                self.path.push(dir);
                self.clue_announced = false;
                tracing::debug!(room = %self.current_room().name(), direction = dir.label(), "player moved");
                Move::Entered
            }
        }
    }

    pub fn handle_token(&mut self, token: &str) -> Move {
        match Command::parse(token) {
            Some(command) => self.apply(command),
            None => Move::Invalid,
        }
    }

    /// Interactive prompt loop. Ends on the exit command, on a dead
    /// end in tour mode, or when the input runs dry (which counts as
    /// leaving).
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<(), QuestError>
    where
        I: InputSource + ?Sized,
        W: Write,
    {
        loop {
            writeln!(out, "\n---------------------------------------")?;
            writeln!(out, "Voce esta em: {}", self.current_room().name())?;

            match self.inspect() {
                Some(clue) => writeln!(out, ">>> Pista encontrada: \"{clue}\" <<<")?,
                None => match self.mode {
                    GameMode::Tour => {}
                    GameMode::Collect => {
                        if self.current_room().clue().is_none() {
                            writeln!(out, "Nenhuma pista relevante neste comodo.")?;
                        }
                    }
                    GameMode::Investigate => {
                        if self.current_room().clue().is_none() {
                            writeln!(out, "Nenhuma pista nova neste comodo.")?;
                        }
                    }
                },
            }

            if self.current_room().is_leaf() {
                if self.mode == GameMode::Tour {
                    writeln!(
                        out,
                        "Este comodo nao tem mais saidas. Fim da exploracao neste caminho!"
                    )?;
                    self.state = SessionState::Exited;
                    break;
                }
                writeln!(out, "Este comodo nao tem mais saidas neste caminho.")?;
            }

            writeln!(out, "Para onde voce quer ir?")?;
            if let Some(room) = self.current_room().child(Direction::Left) {
                writeln!(out, " (e) - Esquerda ({})", room.name())?;
            }
            if let Some(room) = self.current_room().child(Direction::Right) {
                writeln!(out, " (d) - Direita ({})", room.name())?;
            }
            writeln!(out, " (s) - Sair da mansao")?;
            write!(out, "Escolha: ")?;
            out.flush()?;

            let Some(token) = input.next_token()? else {
                self.state = SessionState::Exited;
                break;
            };

            match self.handle_token(&token) {
                Move::Entered => {}
                Move::Blocked(_) => writeln!(out, "Caminho bloqueado. Tente outra direcao.")?,
                Move::Invalid => writeln!(
                    out,
                    "Opcao invalida. Por favor, escolha um caminho existente ou 's' para sair."
                )?,
                Move::Exited => {
                    writeln!(out, "\nVoce decidiu sair da mansao. Ate a proxima, detetive!")?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Ends the session, yielding the evidence for the verdict phase.
    pub fn into_evidence(self) -> (ClueIndex, SuspectLookup) {
        (self.clues, self.lookup)
    }
}
