//! Board Engine
//!
//! 3x3 の盤面に対する純粋関数群。副作用・隠れた状態を持たない。

use super::{
    error::BoardError,
    value_object::{BOARD_SIZE, Team},
};

/// 盤面のマス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Blank,
    Taken(Team),
}

impl Cell {
    /// ワイヤ上の数値表現（blank=0, team1=1, team2=2）
    pub fn number(self) -> u8 {
        match self {
            Cell::Blank => 0,
            Cell::Taken(team) => team.number(),
        }
    }
}

/// 勝利ラインの定義
///
/// インデックスがそのまま line id になる。走査順もこの順（行 → 列 → 対角線）で固定。
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 盤面の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 決着していない
    None,
    /// `team` が `line_id` のラインを揃えた
    Win { team: Team, line_id: u8 },
    /// 空きマスがなく、どのラインも揃っていない
    Tie,
}

/// 9 マスの盤面（行優先）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// 埋まっているマスの数
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Blank).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == BOARD_SIZE
    }

    /// ワイヤ上の数値表現
    pub fn to_numbers(&self) -> [u8; BOARD_SIZE] {
        self.cells.map(Cell::number)
    }
}

/// 着手を適用した新しい盤面を返す
///
/// 範囲外・使用済みのマスへの着手は失敗し、元の盤面には一切触れない。
pub fn apply_move(board: &Board, location: usize, team: Team) -> Result<Board, BoardError> {
    let cell = board.cells.get(location).ok_or(BoardError::OutOfBounds)?;
    if *cell != Cell::Blank {
        return Err(BoardError::CellOccupied);
    }

    let mut next = *board;
    next.cells[location] = Cell::Taken(team);
    Ok(next)
}

/// 盤面の決着を判定する
///
/// `WIN_LINES` の順に走査し、最初に揃ったラインを返す。
/// 同時に複数のラインが揃っている場合も、先に走査したラインが優先される。
pub fn detect_outcome(board: &Board) -> Outcome {
    for (line_id, [a, b, c]) in WIN_LINES.iter().enumerate() {
        if let Cell::Taken(team) = board.cells[*a]
            && board.cells[*b] == Cell::Taken(team)
            && board.cells[*c] == Cell::Taken(team)
        {
            return Outcome::Win {
                team,
                line_id: line_id as u8,
            };
        }
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::None
    }
}
