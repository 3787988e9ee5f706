//! Правила покера (Texas Hold'em): оценка рук, торговля по улицам,
//! расчёт банка с сайд-потами и ход игры от блайндов до шоудауна.
//!
//! Движок не знает ни про сеть, ни про хранилище: каждая операция
//! превращает одно значение `Game` в другое. Рассылка и хранение –
//! забота вызывающей стороны (см. `engine::GameManager` и `api`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
