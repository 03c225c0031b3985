pub mod rodio_player;
