//! UseCase: Room 一覧取得

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// Room 一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 作成日時順の Room 一覧
    pub async fn execute(&self) -> Vec<Room> {
        self.repository.get_rooms().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Timestamp,
        usecase::test_support::{conn, create_test_repository},
    };

    #[tokio::test]
    async fn test_get_rooms_sorted_by_created_at() {
        // テスト項目: 作成日時の昇順で返される
        // given (前提条件):
        let repository = create_test_repository();
        repository
            .create_room("late".to_string(), conn("a"), Timestamp::new(2_000))
            .await
            .unwrap();
        repository
            .create_room("early".to_string(), conn("b"), Timestamp::new(1_000))
            .await
            .unwrap();
        let usecase = GetRoomsUseCase::new(repository);

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        let codes: Vec<String> = rooms.iter().map(|room| room.code().to_string()).collect();
        assert_eq!(codes, vec!["early".to_string(), "late".to_string()]);
    }

    #[tokio::test]
    async fn test_get_rooms_empty() {
        // テスト項目: Room がなければ空
        let usecase = GetRoomsUseCase::new(create_test_repository());
        assert!(usecase.execute().await.is_empty());
    }
}
