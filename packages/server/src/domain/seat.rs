//! Seat / Player Registry
//!
//! Room ごとに 2 つの席を固定で持つ。切断時は席を削除せず空席に戻すので、
//! 同じ接続・別の接続が再び座ることができる。

use super::value_object::{ConnectionId, Team};

/// 席の占有状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Occupancy {
    #[default]
    Vacant,
    Occupied(ConnectionId),
}

/// 席
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    team: Team,
    occupancy: Occupancy,
}

impl Seat {
    fn new(team: Team) -> Self {
        Self {
            team,
            occupancy: Occupancy::Vacant,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn occupant(&self) -> Option<&ConnectionId> {
        match &self.occupancy {
            Occupancy::Occupied(connection_id) => Some(connection_id),
            Occupancy::Vacant => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied(_))
    }

    fn is_held_by(&self, connection_id: &ConnectionId) -> bool {
        self.occupant() == Some(connection_id)
    }
}

/// 2 席分の Registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRegistry {
    seats: [Seat; 2],
}

impl Default for SeatRegistry {
    fn default() -> Self {
        Self {
            seats: Team::ALL.map(Seat::new),
        }
    }
}

impl SeatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    pub fn seat(&self, team: Team) -> &Seat {
        &self.seats[team.seat_index()]
    }

    /// 最初の空席（席 0 → 席 1 の順）に接続を座らせる
    ///
    /// 満席の場合は `None` を返す。満席は通常起こりうる結果なので、呼び出し側で分岐する。
    pub fn assign_seat(&mut self, connection_id: ConnectionId) -> Option<Team> {
        let seat = self.seats.iter_mut().find(|seat| !seat.is_occupied())?;
        seat.occupancy = Occupancy::Occupied(connection_id);
        Some(seat.team)
    }

    /// 接続が座っている席を空席に戻す
    ///
    /// 座っていない接続に対しては何もしない（冪等）。空けた席の Team を返す。
    pub fn vacate(&mut self, connection_id: &ConnectionId) -> Option<Team> {
        let seat = self
            .seats
            .iter_mut()
            .find(|seat| seat.is_held_by(connection_id))?;
        seat.occupancy = Occupancy::Vacant;
        Some(seat.team)
    }

    pub fn find_seat(&self, connection_id: &ConnectionId) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.is_held_by(connection_id))
    }

    pub fn both_occupied(&self) -> bool {
        self.seats.iter().all(Seat::is_occupied)
    }

    /// 着席中の (Team, ConnectionId) を席順に返す
    pub fn occupants(&self) -> impl Iterator<Item = (Team, &ConnectionId)> {
        self.seats
            .iter()
            .filter_map(|seat| seat.occupant().map(|id| (seat.team, id)))
    }
}
