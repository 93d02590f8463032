use crate::geometry::BoardGeometry;
use crate::input::{Command, PRIMARY_BUTTON};
use crate::session::{DEFAULT_HINT_DELAY_SECS, GameSession, GameStatus};
use crate::utils::*;
use chrono::TimeDelta;
use clap::Args;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use pegsol_core as game;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Click { client_x: i32, client_y: i32, button: i16 },
    Hover { client_x: i32, client_y: i32 },
    Leave,
    Action(Command),
    Tick,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a hint seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Idle seconds before a hint shows up on its own
    #[arg(long, default_value_t = DEFAULT_HINT_DELAY_SECS)]
    hint_delay: u32,
}

pub(crate) struct GameView {
    session: GameSession,
    geometry: BoardGeometry,
    hovered: Option<game::Coord2>,
    board_ref: NodeRef,
    _timer_interval: Interval,
    _keydown: EventListener,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(500, move || link.send_message(Msg::Tick))
    }

    fn create_keydown_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keydown", move |e| {
            let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(command) = Command::from_key(&e.key(), e.ctrl_key()) {
                e.prevent_default();
                link.send_message(Msg::Action(command));
            }
        })
    }

    /// Converts client coordinates into the SVG's own pixel space.
    fn board_point(&self, client_x: i32, client_y: i32) -> Option<(f64, f64)> {
        let Some(svg) = self.board_ref.cast::<web_sys::Element>() else {
            log::error!("board element is not mounted");
            return None;
        };
        let rect = svg.get_bounding_client_rect();
        if rect.width() <= 0. || rect.height() <= 0. {
            return None;
        }

        let (width, height) = self.geometry.extent(self.session.engine.size());
        let x = (f64::from(client_x) - rect.left()) * width / rect.width();
        let y = (f64::from(client_y) - rect.top()) * height / rect.height();
        Some((x, y))
    }

    fn view_hole(&self, coords: game::Coord2) -> Html {
        let engine = &self.session.engine;
        let (cx, cy) = self.geometry.cell_center(coords);

        let mut class = classes!("hole");
        if engine.piece_at(coords).is_none() {
            class.push("empty");
        }
        if engine.is_legal_target(coords) {
            class.push("target");
        }
        if engine.hint_move().is_some_and(|mv| mv.target == coords) {
            class.push("hint");
        }

        html! {
            <circle {class}
                cx={cx.to_string()}
                cy={cy.to_string()}
                r={self.geometry.hole_radius.to_string()}/>
        }
    }

    fn view_peg(&self, id: game::PieceId, piece: &game::Piece) -> Html {
        let engine = &self.session.engine;
        let (cx, cy) = self.geometry.cell_center(piece.coords());

        let mut class = classes!("peg");
        if piece.is_selected() {
            class.push("selected");
        }
        if engine.hint_source() == Some(id) {
            class.push("hint");
        }
        if self.hovered == Some(piece.coords()) {
            class.push("hover");
        }

        html! {
            <circle {class}
                key={id.index()}
                cx={cx.to_string()}
                cy={cy.to_string()}
                r={self.geometry.peg_radius.to_string()}/>
        }
    }

    fn view_game_over(&self, ctx: &Context<Self>, status: GameStatus) -> Html {
        let title = match status {
            GameStatus::Playing => return html! {},
            GameStatus::Won => "Solved",
            GameStatus::Stalled { .. } => "No more moves",
        };
        let pegs_left = self.session.engine.piece_count();
        let rating = self.session.rating();

        let cb_restart = ctx.link().callback(|_| Msg::Action(Command::Restart));
        let cb_undo = ctx.link().callback(|_| Msg::Action(Command::Undo));

        html! {
            <dialog open={true}>
                <h2>{title}</h2>
                <p>{format!("{} peg{} left", pegs_left, if pegs_left == 1 { "" } else { "s" })}</p>
                <p class="rating">{rating.message()}</p>
                <menu>
                    <button onclick={cb_undo}>{"Undo"}</button>
                    <button onclick={cb_restart}>{"Play again"}</button>
                </menu>
            </dialog>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::info!("hint seed: {}", seed);

        let engine = game::BoardEngine::english(seed);
        let hint_delay = TimeDelta::seconds(props.hint_delay.into());

        Self {
            session: GameSession::new(engine, hint_delay, utc_now()),
            geometry: BoardGeometry::default(),
            hovered: None,
            board_ref: NodeRef::default(),
            _timer_interval: GameView::create_timer(ctx),
            _keydown: GameView::create_keydown_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Click {
                client_x,
                client_y,
                button,
            } => {
                if button != PRIMARY_BUTTON {
                    return false;
                }
                let Some((x, y)) = self.board_point(client_x, client_y) else {
                    return false;
                };
                log::trace!("board click at ({:.1}, {:.1})", x, y);

                let size = self.session.engine.size();
                match Command::from_board_point(&self.geometry, size, x, y) {
                    Some(command) => {
                        log::debug!("command: {:?}", command);
                        self.session.dispatch(command, utc_now())
                    }
                    None => false,
                }
            }
            Hover { client_x, client_y } => {
                let hovered = if self.session.status().is_over() {
                    None
                } else {
                    self.board_point(client_x, client_y)
                        .and_then(|(x, y)| self.session.peg_under(&self.geometry, x, y))
                };
                if hovered != self.hovered {
                    log::trace!("hover: {:?}", hovered);
                    self.hovered = hovered;
                    true
                } else {
                    false
                }
            }
            Leave => self.hovered.take().is_some(),
            Action(command) => {
                log::debug!("command: {:?}", command);
                self.session.dispatch(command, utc_now())
            }
            Tick => self.session.tick(utc_now()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = &self.session.engine;
        let status = self.session.status();
        let (width, height) = self.geometry.extent(engine.size());

        let onclick = ctx.link().callback(|e: MouseEvent| Msg::Click {
            client_x: e.client_x(),
            client_y: e.client_y(),
            button: e.button(),
        });
        let onmousemove = ctx.link().callback(|e: MouseEvent| Msg::Hover {
            client_x: e.client_x(),
            client_y: e.client_y(),
        });
        let onmouseleave = ctx.link().callback(|_| Msg::Leave);

        let cb_restart = ctx.link().callback(|_| Msg::Action(Command::Restart));
        let cb_undo = ctx.link().callback(|_| Msg::Action(Command::Undo));
        let cb_hint = ctx.link().callback(|_| Msg::Action(Command::Hint));

        let board_class = classes!(
            "board",
            engine.selected_piece().is_some().then_some("selecting"),
            status.is_over().then_some("over"),
        );

        html! {
            <div class="pegsol">
                <nav>
                    <aside>{format!("Pegs: {}", engine.piece_count())}</aside>
                    <aside>{format!("Moves: {}", engine.move_count())}</aside>
                </nav>
                <svg class={board_class}
                    ref={self.board_ref.clone()}
                    viewBox={format!("0 0 {} {}", width, height)}
                    width={width.to_string()}
                    height={height.to_string()}
                    {onclick} {onmousemove} {onmouseleave}>
                    <rect class="base" width={width.to_string()} height={height.to_string()} rx="12"/>
                    { for engine.layout().playable_cells().map(|coords| self.view_hole(coords)) }
                    {
                        for engine
                            .pieces()
                            .filter(|(_, piece)| piece.is_visible())
                            .map(|(id, piece)| self.view_peg(id, piece))
                    }
                </svg>
                <menu>
                    <button onclick={cb_restart} title="R">{"Restart"}</button>
                    <button onclick={cb_undo} disabled={!engine.can_undo()} title="Ctrl+Z">{"Undo"}</button>
                    <button onclick={cb_hint} disabled={status.is_over()} title="H">{"Hint"}</button>
                </menu>
                { self.view_game_over(ctx, status) }
            </div>
        }
    }
}
