//! Room State Machine
//!
//! 1 つの Room は盤面（Board Engine）と 2 席（Seat Registry）を所有し、
//! waiting → playing → {win, tie, disconnect} のライフサイクルを管理する。
//! 外部からの遷移（join / move / chat / disconnect / vote）はすべて検証を先に行い、
//! 失敗時には状態を一切変更しない。

use super::{
    board::{self, Board, Outcome},
    error::RoomError,
    seat::SeatRegistry,
    value_object::{BOARD_SIZE, ConnectionId, Location, RoomCode, Team, Timestamp},
};

/// Room のフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Waiting,
    Playing,
    Win,
    Tie,
    Disconnect,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Playing => "playing",
            Phase::Win => "win",
            Phase::Tie => "tie",
            Phase::Disconnect => "disconnect",
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, Phase::Win | Phase::Tie | Phase::Disconnect)
    }

    pub fn is_in_progress(self) -> bool {
        self == Phase::Playing
    }
}

/// join の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// 割り当てられた Team
    pub team: Team,
    /// この join で 2 席が埋まり、ゲームが開始したか
    pub started: bool,
}

/// move の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub team: Team,
    pub location: Location,
    pub outcome: Outcome,
}

/// vote_to_continue の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// 投票を記録し、相手の投票を待っている
    Waiting { team: Team },
    /// 両者の投票が揃い、新しいゲームを開始した
    Restarted,
}

/// 受信者ごとのスナップショット
///
/// `your_team` と `your_turn` は保存されず、phase / turn / 席から導出される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub code: RoomCode,
    pub seats_occupied: [bool; 2],
    pub board: [u8; BOARD_SIZE],
    pub turn: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub in_progress: bool,
    pub winning_team: Option<Team>,
    pub winning_line: Option<u8>,
    pub your_team: Team,
    pub your_turn: bool,
}

/// Room エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    code: RoomCode,
    seats: SeatRegistry,
    board: Board,
    turn: u32,
    phase: Phase,
    winning_team: Option<Team>,
    winning_line: Option<u8>,
    continue_votes: [bool; 2],
    created_at: Timestamp,
}

impl Room {
    pub fn new(code: RoomCode, created_at: Timestamp) -> Self {
        Self {
            code,
            seats: SeatRegistry::new(),
            board: Board::new(),
            turn: 0,
            phase: Phase::Waiting,
            winning_team: None,
            winning_line: None,
            continue_votes: [false; 2],
            created_at,
        }
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn seats(&self) -> &SeatRegistry {
        &self.seats
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winning_team(&self) -> Option<Team> {
        self.winning_team
    }

    pub fn winning_line(&self) -> Option<u8> {
        self.winning_line
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn team_of(&self, connection_id: &ConnectionId) -> Option<Team> {
        self.seats.find_seat(connection_id).map(|seat| seat.team())
    }

    /// 着席中の (Team, ConnectionId)
    pub fn occupants(&self) -> impl Iterator<Item = (Team, &ConnectionId)> {
        self.seats.occupants()
    }

    /// 手番の Team（playing 以外では `None`）
    pub fn whose_turn(&self) -> Option<Team> {
        self.phase
            .is_in_progress()
            .then(|| Team::for_turn(self.turn))
    }

    /// 接続を空席に座らせる
    ///
    /// 2 席目が埋まった時点で waiting なら盤面をリセットして playing に遷移する。
    pub fn join(&mut self, connection_id: ConnectionId) -> Result<JoinOutcome, RoomError> {
        if self.seats.find_seat(&connection_id).is_some() {
            return Err(RoomError::AlreadyInRoom);
        }

        let team = self
            .seats
            .assign_seat(connection_id)
            .ok_or(RoomError::RoomFull)?;

        let started = self.phase == Phase::Waiting && self.seats.both_occupied();
        if started {
            self.start_game();
        }

        Ok(JoinOutcome { team, started })
    }

    /// 着手する
    ///
    /// 検証順: メンバーか → playing かつ手番か → 盤面上で有効か。
    pub fn make_move(
        &mut self,
        connection_id: &ConnectionId,
        location: i64,
    ) -> Result<MoveOutcome, RoomError> {
        let team = self.team_of(connection_id).ok_or(RoomError::NotAMember)?;

        if self.whose_turn() != Some(team) {
            return Err(RoomError::NotYourTurn);
        }

        let location = Location::new(location)?;
        self.board = board::apply_move(&self.board, location.index(), team)?;
        self.turn += 1;

        let outcome = board::detect_outcome(&self.board);
        match outcome {
            Outcome::Win {
                team: winner,
                line_id,
            } => {
                self.phase = Phase::Win;
                self.winning_team = Some(winner);
                self.winning_line = Some(line_id);
            }
            Outcome::Tie => self.phase = Phase::Tie,
            Outcome::None => {}
        }

        Ok(MoveOutcome {
            team,
            location,
            outcome,
        })
    }

    /// チャットの送信者を検証する（フェーズに関係なく許可）
    pub fn chat(&self, connection_id: &ConnectionId) -> Result<Team, RoomError> {
        self.team_of(connection_id).ok_or(RoomError::NotAMember)
    }

    /// 切断を反映する
    ///
    /// 席を空け、phase を disconnect（終端・再開不可）にする。
    /// 座っていない接続なら何もせず `None` を返す。
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> Option<Team> {
        let team = self.seats.vacate(connection_id)?;
        self.phase = Phase::Disconnect;
        Some(team)
    }

    /// 再戦の投票
    ///
    /// win / tie の後でのみ受け付ける。両者が投票すると同じ Room で新しいゲームを開始する。
    pub fn vote_to_continue(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Result<VoteOutcome, RoomError> {
        let team = self.team_of(connection_id).ok_or(RoomError::NotAMember)?;

        if !matches!(self.phase, Phase::Win | Phase::Tie) {
            return Err(RoomError::GameNotOver);
        }

        self.continue_votes[team.seat_index()] = true;
        if self.continue_votes.iter().all(|voted| *voted) && self.seats.both_occupied() {
            self.start_game();
            return Ok(VoteOutcome::Restarted);
        }

        Ok(VoteOutcome::Waiting { team })
    }

    /// 受信者（`team`）向けのスナップショットを作る
    pub fn view_for(&self, team: Team) -> RoomView {
        RoomView {
            code: self.code.clone(),
            seats_occupied: self.seats.seats().each_ref().map(|seat| seat.is_occupied()),
            board: self.board.to_numbers(),
            turn: self.turn,
            phase: self.phase,
            game_over: self.phase.is_over(),
            in_progress: self.phase.is_in_progress(),
            winning_team: self.winning_team,
            winning_line: self.winning_line,
            your_team: team,
            your_turn: self.whose_turn() == Some(team),
        }
    }

    fn start_game(&mut self) {
        self.board = Board::new();
        self.turn = 0;
        self.phase = Phase::Playing;
        self.winning_team = None;
        self.winning_line = None;
        self.continue_votes = [false; 2];
    }
}
