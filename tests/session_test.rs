//! Driving a game through the session task from the outside.

use std::time::Duration;

use spintris::core::Game;
use spintris::engine::{Session, SessionConfig};
use spintris::types::{Command, GameEvent, Orientation};

#[tokio::test(start_paused = true)]
async fn test_commands_and_gravity_reach_observers() {
    let mut session = Session::spawn(Game::new(99), SessionConfig::default());

    session.snapshots.changed().await.unwrap();
    let first = session.snapshots.borrow_and_update().clone();
    assert!(first.active.is_some());
    assert_eq!(first.orientation, Orientation::Down);

    session.commands.send(Command::RotateBoard).await.unwrap();
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            session.snapshots.changed().await.unwrap();
            if session.snapshots.borrow_and_update().orientation == Orientation::Left {
                break;
            }
        }
    })
    .await
    .unwrap();

    let mut rotated = false;
    while let Ok(event) = session.events.try_recv() {
        rotated |= matches!(event, GameEvent::BoardRotated { width: 22, height: 12, .. });
    }
    assert!(rotated);

    // One gravity step at level 1 is 800ms of game time.
    let before = session.snapshots.borrow().active.clone();
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_ne!(session.snapshots.borrow().active, before);

    drop(session.commands);
    let game = session.task.await.unwrap();
    assert_eq!(game.orientation(), Orientation::Left);
}
