#![cfg(feature = "std")]

use std::fmt::Write;

use serde_json::{json, Map, Value};

use crate::board::Board;
use crate::cell::CellState;
use crate::config::BOARD_SIZE;
use crate::shape::SkillMatrix;
use crate::simulation::Simulation;

pub const LEGEND: &str = ". = water, S = ship, * = affected, X = ship hit";

/// Caption line followed by the matrix rows.
pub fn render_skill<const N: usize>(skill: &SkillMatrix<N>) -> String {
    format!("Skill - {} ({}x{}, 1 = affected, 0 = not affected):\n{}\n", skill.kind(), N, N, skill)
}

/// Legend line followed by the board grid.
pub fn render_board(board: &Board) -> String {
    format!("Board ( {} ):\n{}\n", LEGEND, board)
}

/// Every skill matrix of the simulation, then its current board.
pub fn render_report(sim: &Simulation) -> String {
    let mut out = String::new();
    for skill in sim.skills().iter() {
        out.push_str(&render_skill(skill));
        out.push('\n');
    }
    for cast in sim.casts() {
        // writing to a String cannot fail
        let _ = writeln!(
            out,
            "Cast {} at ({}, {})",
            cast.kind, cast.origin.row, cast.origin.col
        );
    }
    out.push('\n');
    out.push_str(&render_board(sim.board()));
    out
}

pub fn print_skill<const N: usize>(skill: &SkillMatrix<N>) {
    std::print!("{}", render_skill(skill));
}

pub fn print_report(sim: &Simulation) {
    std::print!("{}", render_report(sim));
}

/// Matrix rows as `"1 0 ..."` strings.
pub fn skill_rows<const N: usize>(skill: &SkillMatrix<N>) -> Vec<String> {
    skill.to_string().lines().map(str::to_owned).collect()
}

pub fn skill_json<const N: usize>(skill: &SkillMatrix<N>) -> Value {
    json!({
        "shape": skill.kind(),
        "size": N,
        "cells": skill.count(),
        "rows": skill_rows(skill),
    })
}

/// Machine-readable report: seeded ships, casts, skill matrices, the final
/// board as symbol rows and legacy codes, per-state counts and the union of
/// every cast's footprint.
pub fn json_report(sim: &Simulation) -> Value {
    let board = sim.board();
    let ships: Vec<(usize, usize)> = board
        .cells()
        .filter(|&(_, _, s)| s.has_ship())
        .map(|(r, c, _)| (r, c))
        .collect();
    let skills: Map<String, Value> = sim
        .skills()
        .iter()
        .map(|s| (s.kind().name().to_owned(), json!(skill_rows(s))))
        .collect();
    let rows: Vec<String> = board
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect();
    let counts: Map<String, Value> = CellState::ALL
        .into_iter()
        .map(|s| (s.name().to_owned(), json!(board.count(s))))
        .collect();
    let footprint = sim.footprint();
    let footprint_rows: Vec<String> = footprint.to_string().lines().map(str::to_owned).collect();
    json!({
        "board_size": BOARD_SIZE,
        "ships": ships,
        "casts": sim.casts().collect::<Vec<_>>(),
        "skills": skills,
        "board": rows,
        "codes": board.codes(),
        "counts": counts,
        "footprint": {
            "cells": footprint.count_ones(),
            "rows": footprint_rows,
        },
    })
}
