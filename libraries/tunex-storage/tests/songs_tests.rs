//! Integration tests for the songs vertical slice
//!
//! Covers creator ownership on mutations, the play counter, and the
//! membership cascade on deletion.


use test_helpers::*;
use tunex_core::{types::*, TunexError};

#[tokio::test]
async fn test_create_and_get_song() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let creator = create_test_user(pool, "c@example.com", "creator", &[Role::Creator]).await;
    let song_id = create_test_song(pool, "First Song", creator).await;

    let song = tunex_storage::songs::get_by_id(pool, song_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(song.title, "First Song");
    assert_eq!(song.creator_id, creator);
    assert_eq!(song.play_count, 0);
    assert_eq!(song.genre_name.as_deref(), Some("Pop"));
}

#[tokio::test]
async fn test_get_by_creator_filters_ownership() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let creator1 = create_test_user(pool, "c1@example.com", "creator1", &[Role::Creator]).await;
    let creator2 = create_test_user(pool, "c2@example.com", "creator2", &[Role::Creator]).await;

    create_test_song(pool, "Mine A", creator1).await;
    create_test_song(pool, "Mine B", creator1).await;
    create_test_song(pool, "Theirs", creator2).await;

    let songs = tunex_storage::songs::get_by_creator(pool, creator1).await.unwrap();
    assert_eq!(songs.len(), 2);
    assert!(songs.iter().all(|s| s.creator_id == creator1));
}

#[tokio::test]
async fn test_rename_requires_ownership() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner@example.com", "owner", &[Role::Creator]).await;
    let other = create_test_user(pool, "other@example.com", "other", &[Role::Creator]).await;
    let song_id = create_test_song(pool, "Original Title", owner).await;

    let result = tunex_storage::songs::rename(pool, song_id, "Hijacked", other).await;
    assert!(matches!(result, Err(TunexError::PermissionDenied)));

    tunex_storage::songs::rename(pool, song_id, "New Title", owner)
        .await
        .unwrap();

    let song = tunex_storage::songs::get_by_id(pool, song_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(song.title, "New Title");
}

#[tokio::test]
async fn test_play_count_increments_by_exactly_one() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let creator = create_test_user(pool, "c@example.com", "creator", &[Role::Creator]).await;
    let song_id = create_test_song(pool, "Hit Single", creator).await;

    for _ in 0..5 {
        tunex_storage::songs::increment_play_count(pool, song_id)
            .await
            .unwrap();
    }

    let song = tunex_storage::songs::get_by_id(pool, song_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(song.play_count, 5);
}

#[tokio::test]
async fn test_increment_unknown_song_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let result = tunex_storage::songs::increment_play_count(pool, 9999).await;
    assert!(matches!(result, Err(TunexError::SongNotFound(9999))));
}

#[tokio::test]
async fn test_delete_cascades_memberships_across_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let creator = create_test_user(pool, "c@example.com", "creator", &[Role::Creator]).await;
    let listener = create_test_user(pool, "l@example.com", "listener", &[Role::User]).await;

    let song = create_test_song(pool, "Everywhere", creator).await;
    let keeper = create_test_song(pool, "Keeper", creator).await;

    let gym = create_test_playlist(pool, "Gym", listener).await;
    let chill = create_test_playlist(pool, "Chill", listener).await;

    for playlist in [gym, chill] {
        tunex_storage::playlists::add_song(pool, playlist, song, listener)
            .await
            .unwrap();
        tunex_storage::playlists::add_song(pool, playlist, keeper, listener)
            .await
            .unwrap();
    }

    tunex_storage::songs::delete(pool, song, creator).await.unwrap();

    assert!(tunex_storage::songs::get_by_id(pool, song).await.unwrap().is_none());

    for playlist in [gym, chill] {
        let entries = tunex_storage::playlists::get_with_songs(pool, playlist, listener)
            .await
            .unwrap()
            .unwrap()
            .songs
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].song_id, keeper);
    }
}

#[tokio::test]
async fn test_delete_requires_ownership() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner@example.com", "owner", &[Role::Creator]).await;
    let other = create_test_user(pool, "other@example.com", "other", &[Role::Creator]).await;
    let song_id = create_test_song(pool, "Protected", owner).await;

    let result = tunex_storage::songs::delete(pool, song_id, other).await;
    assert!(matches!(result, Err(TunexError::PermissionDenied)));

    assert!(tunex_storage::songs::get_by_id(pool, song_id)
        .await
        .unwrap()
        .is_some());
}
