use serde_json::{json, Value};
use crate::drill_engine::{
    error::Result,
    models::{Problem, Section, Worksheet},
};

/// One printable line for a problem.
///
/// Equations read `a op b = result` with the hidden side shown as `X`.
/// Products and quotients print just their two operands.
pub fn problem_line(problem: &Problem) -> String {
    match problem {
        Problem::Addition(eq)       => format!("{} + {} = {}", eq.left, eq.right, eq.result),
        Problem::Subtraction(eq)    => format!("{} - {} = {}", eq.left, eq.right, eq.result),
        Problem::Multiplication(p)  => format!("{} {}", p.first, p.second),
        Problem::Division(p)        => format!("{} {}", p.first, p.second),
    }
}

/// Header line followed by one line per problem.
fn section_text(out: &mut String, section: &Section) {
    out.push_str(&format!("{}\n", section.kind));
    for p in &section.problems {
        out.push_str(&problem_line(p));
        out.push('\n');
    }
}

/// Answer as printed in the key; `?` for a problem with no whole-number answer.
fn answer_text(problem: &Problem) -> String {
    problem.answer().map_or_else(|| "?".to_string(), |a| a.to_string())
}

/// Plain-text worksheet. Sections after the first are preceded by a blank line.
///
/// With `with_answers`, an answer key follows the last section.
pub fn render_text(sheet: &Worksheet, with_answers: bool) -> String {
    let mut out = String::new();
    for (i, section) in sheet.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        section_text(&mut out, section);
    }

    if with_answers && !sheet.sections.is_empty() {
        out.push_str("\nAnswers\n");
        for section in &sheet.sections {
            let answers: Vec<String> = section.problems.iter().map(answer_text).collect();
            out.push_str(&format!("{}: {}\n", section.kind, answers.join(" ")));
        }
    }
    out
}

fn problem_json(problem: &Problem) -> Value {
    json!({
        "text": problem_line(problem),
        // `null` when the problem has no whole-number answer.
        "answer": problem.answer(),
        "problem": problem,
    })
}

/// Worksheet as a JSON document, one entry per section.
pub fn to_json(sheet: &Worksheet) -> Value {
    let sections: Vec<Value> = sheet
        .sections
        .iter()
        .map(|s| {
            json!({
                "kind": s.kind,
                "title": s.kind.to_string(),
                "tag": s.kind.tag(),
                "problems": s.problems.iter().map(problem_json).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "rng_seed": sheet.rng_seed,
        "sections": sections,
    })
}

pub fn render_json(sheet: &Worksheet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(sheet))?)
}
