//! Room Directory
//!
//! プロセス全体で 1 つの room code → Room のマップ。
//! 接続 → room code の対応も自前で管理し、1 接続が同時に参加できる Room を 1 つに制限する。
//! move / chat / vote はクライアントから room code を受け取らず、この対応から Room を解決する。

use std::collections::HashMap;

use super::{
    error::RoomError,
    room::{JoinOutcome, MoveOutcome, Room, VoteOutcome},
    value_object::{ConnectionId, MessageContent, RoomCode, Team, Timestamp},
};

/// 切断によって取り除かれた Room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Directory から削除された Room（phase は disconnect、残りの参加者を含む）
    pub room: Room,
    /// 切断した接続が座っていた席の Team
    pub team: Team,
}

/// Room Directory
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: HashMap<RoomCode, Room>,
    memberships: HashMap<ConnectionId, RoomCode>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Room を作成し、作成者を席 0 に座らせる
    pub fn create(
        &mut self,
        code: &str,
        connection_id: ConnectionId,
        created_at: Timestamp,
    ) -> Result<&Room, RoomError> {
        let code = RoomCode::new(code)?;
        if self.memberships.contains_key(&connection_id) {
            return Err(RoomError::AlreadyInRoom);
        }
        if self.rooms.contains_key(&code) {
            return Err(RoomError::DuplicateCode);
        }

        let mut room = Room::new(code.clone(), created_at);
        room.join(connection_id.clone())?;
        self.memberships.insert(connection_id, code.clone());

        Ok(&*self.rooms.entry(code).or_insert(room))
    }

    /// 既存の Room に参加する
    pub fn join(
        &mut self,
        code: &str,
        connection_id: ConnectionId,
    ) -> Result<(JoinOutcome, &Room), RoomError> {
        let code = RoomCode::new(code)?;
        if self.memberships.contains_key(&connection_id) {
            return Err(RoomError::AlreadyInRoom);
        }

        let room = self.rooms.get_mut(&code).ok_or(RoomError::NotFound)?;
        let outcome = room.join(connection_id.clone())?;
        self.memberships.insert(connection_id, code);

        Ok((outcome, &*room))
    }

    /// 接続が参加している Room の code
    pub fn resolve_room_for(&self, connection_id: &ConnectionId) -> Option<&RoomCode> {
        self.memberships.get(connection_id)
    }

    pub fn make_move(
        &mut self,
        connection_id: &ConnectionId,
        location: i64,
    ) -> Result<(MoveOutcome, &Room), RoomError> {
        let room = self.room_of_mut(connection_id)?;
        let outcome = room.make_move(connection_id, location)?;
        Ok((outcome, &*room))
    }

    /// チャットの送信者と本文を検証する
    pub fn chat(
        &self,
        connection_id: &ConnectionId,
        message: String,
    ) -> Result<(Team, MessageContent, &Room), RoomError> {
        let room = self
            .resolve_room_for(connection_id)
            .and_then(|code| self.rooms.get(code))
            .ok_or(RoomError::NotAMember)?;
        let team = room.chat(connection_id)?;
        let content = MessageContent::new(message)?;
        Ok((team, content, room))
    }

    pub fn vote_to_continue(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Result<(VoteOutcome, &Room), RoomError> {
        let room = self.room_of_mut(connection_id)?;
        let outcome = room.vote_to_continue(connection_id)?;
        Ok((outcome, &*room))
    }

    /// 切断を反映する
    ///
    /// Room は disconnect に遷移した上で Directory から削除され、残りの参加者の所属も解除される。
    /// 接続がどの Room にも参加していなければ `None`。
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> Option<Departure> {
        let code = self.memberships.remove(connection_id)?;
        let mut room = self.rooms.remove(&code)?;
        let team = room.disconnect(connection_id)?;

        for (_, remaining) in room.occupants() {
            self.memberships.remove(remaining);
        }

        Some(Departure { room, team })
    }

    pub fn get(&self, code: &str) -> Option<&Room> {
        let code = RoomCode::new(code).ok()?;
        self.rooms.get(&code)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    fn room_of_mut(&mut self, connection_id: &ConnectionId) -> Result<&mut Room, RoomError> {
        let code = self
            .memberships
            .get(connection_id)
            .ok_or(RoomError::NotAMember)?;
        self.rooms.get_mut(code).ok_or(RoomError::NotAMember)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::Phase;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id)
    }

    fn now() -> Timestamp {
        Timestamp::new(1000)
    }

    fn directory_with_game() -> RoomDirectory {
        let mut directory = RoomDirectory::new();
        directory.create("abc", conn("x"), now()).unwrap();
        directory.join("abc", conn("y")).unwrap();
        directory
    }

    #[test]
    fn test_create_seats_creator_as_team_one() {
        // テスト項目: X が "abc" を作成すると席 0 / team1 に座り、phase は waiting
        // given (前提条件):
        let mut directory = RoomDirectory::new();

        // when (操作):
        let room = directory.create("abc", conn("x"), now()).unwrap();

        // then (期待する結果):
        assert_eq!(room.phase(), Phase::Waiting);
        assert_eq!(room.team_of(&conn("x")), Some(Team::One));
        assert_eq!(
            directory.resolve_room_for(&conn("x")).map(RoomCode::as_str),
            Some("abc")
        );
    }

    #[test]
    fn test_join_starts_game() {
        // テスト項目: Y が "abc" に参加すると席 1 / team2 に座り、playing・turn 0 に遷移する
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        directory.create("abc", conn("x"), now()).unwrap();

        // when (操作):
        let (outcome, room) = directory.join("abc", conn("y")).unwrap();

        // then (期待する結果):
        assert_eq!(outcome.team, Team::Two);
        assert!(outcome.started);
        assert_eq!(room.phase(), Phase::Playing);
        assert_eq!(room.turn(), 0);
    }

    #[test]
    fn test_create_errors() {
        // テスト項目: 不正な code / 重複 code / 参加済みの接続による作成は拒否される
        let mut directory = RoomDirectory::new();
        directory.create("abc", conn("x"), now()).unwrap();

        assert_eq!(
            directory.create("", conn("y"), now()).map(|_| ()),
            Err(RoomError::InvalidCode)
        );
        assert_eq!(
            directory.create("abc", conn("y"), now()).map(|_| ()),
            Err(RoomError::DuplicateCode)
        );
        assert_eq!(
            directory.create("other", conn("x"), now()).map(|_| ()),
            Err(RoomError::AlreadyInRoom)
        );
        assert_eq!(directory.rooms().count(), 1);
    }

    #[test]
    fn test_join_errors() {
        // テスト項目: 不正な code / 存在しない Room / 参加済みの接続による参加は拒否される
        let mut directory = RoomDirectory::new();
        directory.create("abc", conn("x"), now()).unwrap();
        directory.create("def", conn("w"), now()).unwrap();

        assert_eq!(
            directory.join("  ", conn("y")).map(|_| ()),
            Err(RoomError::InvalidCode)
        );
        assert_eq!(
            directory.join("zzz", conn("y")).map(|_| ()),
            Err(RoomError::NotFound)
        );
        assert_eq!(
            directory.join("abc", conn("w")).map(|_| ()),
            Err(RoomError::AlreadyInRoom)
        );
        assert_eq!(
            directory.join("abc", conn("x")).map(|_| ()),
            Err(RoomError::AlreadyInRoom)
        );
    }

    #[test]
    fn test_third_connection_gets_room_full_without_mutation() {
        // テスト項目: 満席の Room への参加は RoomFull で、Room も所属も変わらない
        // given (前提条件):
        let mut directory = directory_with_game();
        let before = directory.get("abc").unwrap().clone();

        // when (操作):
        let result = directory.join("abc", conn("z")).map(|_| ());

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomFull));
        assert_eq!(directory.get("abc"), Some(&before));
        assert_eq!(directory.resolve_room_for(&conn("z")), None);
    }

    #[test]
    fn test_move_is_resolved_from_membership() {
        // テスト項目: move は接続の所属から Room を解決する。未所属なら NotAMember
        let mut directory = directory_with_game();

        let (outcome, room) = directory.make_move(&conn("x"), 4).unwrap();
        assert_eq!(outcome.team, Team::One);
        assert_eq!(room.turn(), 1);

        assert_eq!(
            directory.make_move(&conn("stranger"), 0).map(|_| ()),
            Err(RoomError::NotAMember)
        );
    }

    #[test]
    fn test_chat_validation() {
        // テスト項目: chat はメンバーのみ、空メッセージは InvalidMessage
        let directory = directory_with_game();

        let (team, content, _) = directory.chat(&conn("y"), "gg".to_string()).unwrap();
        assert_eq!(team, Team::Two);
        assert_eq!(content.as_str(), "gg");

        assert_eq!(
            directory.chat(&conn("y"), " ".to_string()).map(|_| ()),
            Err(RoomError::InvalidMessage)
        );
        assert_eq!(
            directory.chat(&conn("z"), "hi".to_string()).map(|_| ()),
            Err(RoomError::NotAMember)
        );
    }

    #[test]
    fn test_disconnect_removes_room() {
        // テスト項目: playing 中に X が切断すると Room は disconnect になり Directory から削除される
        // given (前提条件):
        let mut directory = directory_with_game();

        // when (操作):
        let departure = directory.disconnect(&conn("x")).unwrap();

        // then (期待する結果):
        assert_eq!(departure.team, Team::One);
        assert_eq!(departure.room.phase(), Phase::Disconnect);
        let remaining: Vec<&ConnectionId> = departure.room.occupants().map(|(_, id)| id).collect();
        assert_eq!(remaining, vec![&conn("y")]);
        assert_eq!(directory.rooms().count(), 0);
        assert_eq!(directory.resolve_room_for(&conn("x")), None);
        assert_eq!(directory.resolve_room_for(&conn("y")), None);

        // 以降の joinroom("abc") はどの接続からでも NotFound
        assert_eq!(
            directory.join("abc", conn("z")).map(|_| ()),
            Err(RoomError::NotFound)
        );
        assert_eq!(
            directory.join("abc", conn("y")).map(|_| ()),
            Err(RoomError::NotFound)
        );
    }

    #[test]
    fn test_remaining_player_can_create_new_room_after_disconnect() {
        // テスト項目: 切断で Room が削除された後、残った参加者は新しい Room を作成できる
        let mut directory = directory_with_game();
        directory.disconnect(&conn("x"));

        assert!(directory.create("abc", conn("y"), now()).is_ok());
    }

    #[test]
    fn test_disconnect_without_room_is_none() {
        let mut directory = RoomDirectory::new();
        assert_eq!(directory.disconnect(&conn("x")), None);
    }

    #[test]
    fn test_vote_to_continue_via_directory() {
        // テスト項目: Directory 経由の再戦投票
        let mut directory = directory_with_game();
        for (player, location) in [("x", 0), ("y", 3), ("x", 1), ("y", 4), ("x", 2)] {
            directory.make_move(&conn(player), location).unwrap();
        }

        let (first, _) = directory.vote_to_continue(&conn("x")).unwrap();
        let (second, room) = directory.vote_to_continue(&conn("y")).unwrap();

        assert_eq!(first, VoteOutcome::Waiting { team: Team::One });
        assert_eq!(second, VoteOutcome::Restarted);
        assert_eq!(room.phase(), Phase::Playing);
    }
}
