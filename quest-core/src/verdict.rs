//! Verdict evaluator: tallies the collected evidence against an
//! accused suspect and decides the case.

use std::io::Write;

use crate::clues::ClueIndex;
use crate::explore::InputSource;
use crate::lookup::SuspectLookup;
use crate::QuestError;

/// Clues pointing at the accused needed to uphold an accusation.
pub const EVIDENCE_THRESHOLD: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Upheld,
    Rejected,
}

impl Verdict {
    pub fn from_count(count: usize) -> Self {
        if count >= EVIDENCE_THRESHOLD {
            Verdict::Upheld
        } else {
            Verdict::Rejected
        }
    }
}

/// Number of collected clues whose lookup resolves to the accused
/// name exactly (case-sensitive).
pub fn tally(clues: &ClueIndex, lookup: &SuspectLookup, accused: &str) -> usize {
    clues
        .iter()
        .filter(|clue| lookup.get(clue) == Some(accused))
        .count()
}

/// The judgment phase: lists the evidence, asks for an accusation and
/// renders the verdict. Returns `None` when no accusation was made
/// (no evidence, or the input ran dry).
pub fn judgment<I, W>(
    clues: &ClueIndex,
    lookup: &SuspectLookup,
    suspects: &[String],
    input: &mut I,
    out: &mut W,
) -> Result<Option<(String, usize, Verdict)>, QuestError>
where
    I: InputSource + ?Sized,
    W: Write,
{
    writeln!(out, "\n=======================================")?;
    writeln!(out, "        J U L G A M E N T O")?;
    writeln!(out, "=======================================")?;

    if clues.is_empty() {
        writeln!(
            out,
            "Voce nao coletou pistas suficientes para fazer uma acusacao. Caso encerrado."
        )?;
        return Ok(None);
    }

    writeln!(out, "Pistas coletadas em ordem alfabetica:")?;
    for clue in clues {
        writeln!(out, "- {clue}")?;
    }

    if !suspects.is_empty() {
        writeln!(out, "\nSuspeitos possiveis: {}", suspects.join(", "))?;
    }
    write!(out, "Quem voce acusa de ser o culpado? ")?;
    out.flush()?;

    let Some(accused) = input.next_token()? else {
        writeln!(out, "\nNenhuma acusacao foi feita. Caso encerrado.")?;
        return Ok(None);
    };

    let count = tally(clues, lookup, &accused);
    let verdict = Verdict::from_count(count);
    tracing::debug!(accused = %accused, count, ?verdict, "case decided");

    writeln!(out, "\n--- Veredito ---")?;
    writeln!(
        out,
        "Voce acusou {accused}. A investigacao revelou {count} pista(s) contra esta pessoa."
    )?;
    match verdict {
        Verdict::Upheld => writeln!(
            out,
            "Evidencias suficientes! Voce desvendou o misterio! PARABENS!"
        )?,
        Verdict::Rejected => writeln!(
            out,
            "Evidencias insuficientes. O verdadeiro culpado escapou..."
        )?,
    }

    Ok(Some((accused, count, verdict)))
}
