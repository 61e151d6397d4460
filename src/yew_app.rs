use gloo::events::EventListener;
use web_sys::{CompositionEvent, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::app_router::{self, Route};
use crate::auth;
use crate::core::*;
use crate::gestures::PanZoomState;
use crate::persisted::SettingsBlob;
use crate::persisted_store;
use sipjamalpuri_core::hangul;
use sipjamalpuri_core::{cells_from_snapshot, snapshot_from_grid, PuzzleDefinition};

#[derive(Clone, Debug, PartialEq)]
struct ClueItem {
    selector: ClueSelector,
    text: String,
    length: usize,
}

fn clue_items(puzzle: &PuzzleDefinition) -> Vec<ClueItem> {
    let mut items: Vec<ClueItem> = puzzle
        .clues
        .iter()
        .map(|(key, text)| {
            let selector = ClueSelector::from_key(key);
            let length = puzzle
                .answers
                .get(key)
                .map(|meta| meta.length)
                .unwrap_or(0);
            ClueItem {
                selector,
                text: text.clone(),
                length,
            }
        })
        .collect();
    items.sort_by(|a, b| {
        let num_a = a.selector.number.parse::<u32>().unwrap_or(u32::MAX);
        let num_b = b.selector.number.parse::<u32>().unwrap_or(u32::MAX);
        let rank = |direction: Direction| match direction {
            Direction::Across => 0,
            Direction::Down => 1,
        };
        num_a
            .cmp(&num_b)
            .then_with(|| rank(a.selector.direction).cmp(&rank(b.selector.direction)))
    });
    items
}

fn touch_point(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().item(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

fn pinch_distance(event: &TouchEvent) -> Option<f64> {
    let touches = event.touches();
    if touches.length() != 2 {
        return None;
    }
    let a = touches.item(0)?;
    let b = touches.item(1)?;
    let dx = (a.client_x() - b.client_x()) as f64;
    let dy = (a.client_y() - b.client_y()) as f64;
    Some((dx * dx + dy * dy).sqrt())
}

fn last_char(value: &str) -> Option<char> {
    value.chars().last()
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let route = use_state(app_router::current_route);
    let settings = use_state(persisted_store::settings_blob);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    route.set(app_router::current_route());
                })
            });
            move || drop(listener)
        });
    }

    {
        use_effect_with(settings.dark_mode, move |dark| {
            if let Some(root) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let result = if *dark {
                    root.class_list().add_1("dark")
                } else {
                    root.class_list().remove_1("dark")
                };
                if result.is_err() {
                    gloo::console::warn!("settings: theme class update failed");
                }
            }
            || ()
        });
    }

    let on_toggle_dark = {
        let settings = settings.clone();
        Callback::from(move |_: ()| {
            let next = persisted_store::update_settings_blob(|blob| {
                blob.dark_mode = !blob.dark_mode;
            });
            settings.set(next);
        })
    };
    let on_toggle_hints = {
        let settings = settings.clone();
        Callback::from(move |_: ()| {
            let next = persisted_store::update_settings_blob(|blob| {
                blob.show_hints = !blob.show_hints;
            });
            settings.set(next);
        })
    };

    let on_login = {
        let route = route.clone();
        Callback::from(move |user_id: String| {
            auth::sign_in(&user_id);
            app_router::navigate(&Route::Menu);
            route.set(Route::Menu);
        })
    };
    let on_logout = {
        let route = route.clone();
        Callback::from(move |_: ()| {
            auth::sign_out();
            app_router::navigate(&Route::Login);
            route.set(Route::Login);
        })
    };

    let current = (*route).clone();
    if current.requires_auth() && !auth::is_authenticated() {
        // Keep the address bar consistent with what is shown.
        app_router::redirect(&Route::Login);
        return html! { <LoginPage on_login={on_login} /> };
    }

    match current {
        Route::Login => html! { <LoginPage on_login={on_login} /> },
        Route::Menu => html! { <MenuPage on_logout={on_logout} /> },
        Route::Game { topic } => html! {
            <GamePage
                topic={AttrValue::from(topic)}
                settings={(*settings).clone()}
                on_toggle_dark={on_toggle_dark}
                on_toggle_hints={on_toggle_hints}
            />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoginProps {
    pub on_login: Callback<String>,
}

#[function_component(LoginPage)]
fn login_page(props: &LoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };
    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| match auth::demo_login(&email, &password) {
            Some(user_id) => on_login.emit(user_id),
            None => error.set(Some("이메일 또는 비밀번호가 올바르지 않습니다.")),
        })
    };

    html! {
        <main class="page page-login">
            <div class="login-card">
                <h1>{ "로그인" }</h1>
                <button type="button" class="login-provider" disabled={true}>
                    { "Google로 로그인" }
                </button>
                <div class="login-divider"><span>{ "또는" }</span></div>
                <input
                    type="email"
                    placeholder="이메일"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <input
                    type="password"
                    placeholder="비밀번호"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                if let Some(message) = *error {
                    <p class="login-error">{ message }</p>
                }
                <button type="button" class="login-submit" onclick={on_submit}>
                    { "이메일로 로그인" }
                </button>
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MenuProps {
    pub on_logout: Callback<()>,
}

#[function_component(MenuPage)]
fn menu_page(props: &MenuProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };
    let sections: Html = MENU_SECTIONS
        .iter()
        .map(|section| {
            let topics: Html = section
                .topics
                .iter()
                .enumerate()
                .map(|(index, title)| {
                    let topic = sipjamalpuri_core::catalog::topic_id(section.number, index);
                    let onclick = {
                        let topic = topic.clone();
                        Callback::from(move |_: MouseEvent| {
                            app_router::navigate(&Route::Game {
                                topic: topic.clone(),
                            });
                        })
                    };
                    html! {
                        <li>
                            <button type="button" class="menu-topic" {onclick}>
                                { *title }
                            </button>
                        </li>
                    }
                })
                .collect();
            html! {
                <section class="menu-section">
                    <h2>{ format!("{}. {}", section.numeral, section.title) }</h2>
                    <ul>{ topics }</ul>
                </section>
            }
        })
        .collect();

    html! {
        <main class="page page-menu">
            <header class="menu-header">
                <h1>{ "십자말풀이" }</h1>
                <button type="button" class="menu-logout" onclick={on_logout}>
                    { "로그아웃" }
                </button>
            </header>
            { sections }
        </main>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let on_back = Callback::from(move |_: MouseEvent| {
        app_router::navigate(&Route::Menu);
    });
    html! {
        <main class="page page-not-found">
            <h1>{ "퍼즐을 찾을 수 없습니다" }</h1>
            <p>{ "선택한 주제에 등록된 퍼즐이 아직 없습니다." }</p>
            <button type="button" onclick={on_back}>{ "목록으로" }</button>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GameProps {
    pub topic: AttrValue,
    pub settings: SettingsBlob,
    pub on_toggle_dark: Callback<()>,
    pub on_toggle_hints: Callback<()>,
}

#[function_component(GamePage)]
fn game_page(props: &GameProps) -> Html {
    let session = use_mut_ref(|| None::<PuzzleSession>);
    let revision = use_state(|| 0u64);
    let answer_open = use_state(|| false);
    let settings_open = use_state(|| false);
    let focused = use_state(|| None::<(usize, usize)>);
    let pan_zoom = use_mut_ref(PanZoomState::new);
    let transform = use_state(|| PanZoomState::new().transform_style());
    let cell_size = use_state(|| MAX_CELL_SIZE);

    // Build the session for the topic and restore any persisted progress.
    {
        let session = session.clone();
        let revision = revision.clone();
        let answer_open = answer_open.clone();
        use_effect_with(props.topic.clone(), move |topic: &AttrValue| {
            let mut next = puzzle_for_topic(topic.as_str()).map(PuzzleSession::new);
            if let Some(active) = next.as_mut() {
                if let Some(snapshot) = persisted_store::load_progress(topic.as_str()) {
                    match cells_from_snapshot(&snapshot, active.puzzle().size) {
                        Some(cells) => {
                            active.restore_grid(cells);
                        }
                        None => {
                            gloo::console::warn!("progress: stale snapshot", topic.to_string());
                        }
                    }
                }
            }
            *session.borrow_mut() = next;
            answer_open.set(false);
            revision.set(*revision + 1);
            || ()
        });
    }

    // Fit the cell size to the viewport.
    {
        let cell_size = cell_size.clone();
        let session = session.clone();
        use_effect_with(props.topic.clone(), move |_| {
            let update = move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(360.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(640.0);
                let size = session
                    .borrow()
                    .as_ref()
                    .map(|active| active.puzzle().size)
                    .unwrap_or(10);
                let (avail_width, avail_height) = if width > height {
                    (width * 0.5 * 0.95, height * 0.85)
                } else {
                    (width * 0.95, height * 0.45)
                };
                cell_size.set(calculate_cell_size(size, avail_width, avail_height));
            };
            update();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "resize", move |_| update()));
            move || drop(listener)
        });
    }

    let save = {
        let session = session.clone();
        let topic = props.topic.clone();
        move || {
            if let Some(active) = session.borrow().as_ref() {
                let snapshot = snapshot_from_grid(topic.as_str(), active.grid());
                persisted_store::save_progress(topic.as_str(), &snapshot);
            }
        }
    };
    let bump = {
        let revision = revision.clone();
        move || revision.set(*revision + 1)
    };

    let on_clue_select = {
        let session = session.clone();
        let answer_open = answer_open.clone();
        let bump = bump.clone();
        Callback::from(move |selector: ClueSelector| {
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            match active.select_clue(selector) {
                Ok(()) => {
                    active.open_editor();
                    drop(guard);
                    answer_open.set(true);
                    bump();
                }
                Err(err) => {
                    gloo::console::warn!("clue selection rejected", err.to_string());
                }
            }
        })
    };

    let on_modal_key = {
        let session = session.clone();
        let bump = bump.clone();
        Callback::from(move |event: KeyboardEvent| {
            let mut guard = session.borrow_mut();
            let Some(buffer) = guard.as_mut().and_then(|active| active.buffer_mut()) else {
                return;
            };
            let len = buffer.len() as isize;
            match event.key().as_str() {
                "ArrowLeft" => buffer.move_cursor(-1),
                "ArrowRight" => buffer.move_cursor(1),
                "Home" => buffer.move_cursor(-len),
                "End" => buffer.move_cursor(len),
                "Backspace" => buffer.backspace(),
                "Delete" => buffer.delete_forward(),
                _ => return,
            }
            event.prevent_default();
            drop(guard);
            bump();
        })
    };

    let on_modal_input = {
        let session = session.clone();
        let bump = bump.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut guard = session.borrow_mut();
            let Some(buffer) = guard.as_mut().and_then(|active| active.buffer_mut()) else {
                return;
            };
            if buffer.is_composing() {
                // The input method owns the pending character.
                return;
            }
            if let Some(ch) = last_char(&input.value()) {
                buffer.type_char(ch);
            }
            input.set_value("");
            drop(guard);
            bump();
        })
    };

    let on_comp_start = {
        let session = session.clone();
        let bump = bump.clone();
        Callback::from(move |_: CompositionEvent| {
            let mut guard = session.borrow_mut();
            let Some(buffer) = guard.as_mut().and_then(|active| active.buffer_mut()) else {
                return;
            };
            buffer.composition_start();
            drop(guard);
            bump();
        })
    };

    let on_comp_update = {
        let session = session.clone();
        let bump = bump.clone();
        Callback::from(move |event: CompositionEvent| {
            let mut guard = session.borrow_mut();
            let Some(buffer) = guard.as_mut().and_then(|active| active.buffer_mut()) else {
                return;
            };
            if let Some(ch) = event.data().as_deref().and_then(last_char) {
                buffer.composition_update(ch);
            }
            drop(guard);
            bump();
        })
    };

    let on_comp_end = {
        let session = session.clone();
        let bump = bump.clone();
        Callback::from(move |event: CompositionEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut guard = session.borrow_mut();
            let Some(buffer) = guard.as_mut().and_then(|active| active.buffer_mut()) else {
                return;
            };
            let finished = event.data().as_deref().and_then(last_char);
            buffer.composition_end(finished);
            input.set_value("");
            drop(guard);
            bump();
        })
    };

    let on_confirm = {
        let session = session.clone();
        let answer_open = answer_open.clone();
        let save = save.clone();
        let bump = bump.clone();
        Callback::from(move |_: ()| {
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            match active.confirm() {
                Ok(true) => {
                    drop(guard);
                    save();
                    answer_open.set(false);
                    bump();
                }
                Ok(false) => {}
                Err(err) => {
                    gloo::console::warn!("answer commit rejected", err.to_string());
                }
            }
        })
    };

    let on_cancel = {
        let session = session.clone();
        let answer_open = answer_open.clone();
        let bump = bump.clone();
        Callback::from(move |_: ()| {
            if let Some(active) = session.borrow_mut().as_mut() {
                active.cancel();
            }
            answer_open.set(false);
            bump();
        })
    };

    let on_cell_click = {
        let session = session.clone();
        let focused = focused.clone();
        Callback::from(move |(row, col): (usize, usize)| {
            let blocked = session
                .borrow()
                .as_ref()
                .map(|active| active.puzzle().is_blocked(Coord { x: col, y: row }))
                .unwrap_or(true);
            if !blocked {
                focused.set(Some((row, col)));
            }
        })
    };

    let on_cell_input = {
        let session = session.clone();
        let save = save.clone();
        let bump = bump.clone();
        Callback::from(move |(row, col, event): (usize, usize, InputEvent)| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = input.value();
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            if value.is_empty() {
                active.set_cell(row, col, None);
                drop(guard);
                save();
                bump();
                return;
            }
            // Partial jamo stay in the input while the IME composes; only a
            // complete syllable reaches the grid.
            if let Some(ch) = last_char(&value).filter(|ch| hangul::is_syllable(*ch)) {
                active.set_cell(row, col, Some(ch));
                drop(guard);
                save();
                bump();
            }
        })
    };

    let on_cell_comp_end = {
        let session = session.clone();
        let save = save.clone();
        let bump = bump.clone();
        Callback::from(move |(row, col, event): (usize, usize, CompositionEvent)| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let finished = event.data().as_deref().and_then(last_char);
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            if let Some(ch) = finished.filter(|ch| hangul::is_syllable(*ch)) {
                active.set_cell(row, col, Some(ch));
            }
            let canonical = active
                .grid()
                .cell(row, col)
                .map(String::from)
                .unwrap_or_default();
            input.set_value(&canonical);
            drop(guard);
            save();
            bump();
        })
    };

    let on_touch_start = {
        let pan_zoom = pan_zoom.clone();
        Callback::from(move |event: TouchEvent| {
            let mut state = pan_zoom.borrow_mut();
            if let Some(distance) = pinch_distance(&event) {
                state.touch_start_pinch(distance);
            } else if let Some((x, y)) = touch_point(&event) {
                state.touch_start_single(x, y);
            }
        })
    };
    let on_touch_move = {
        let pan_zoom = pan_zoom.clone();
        let transform = transform.clone();
        Callback::from(move |event: TouchEvent| {
            let mut state = pan_zoom.borrow_mut();
            if let Some(distance) = pinch_distance(&event) {
                event.prevent_default();
                state.touch_move_pinch(distance);
            } else if let Some((x, y)) = touch_point(&event) {
                state.touch_move_single(x, y);
            }
            transform.set(state.transform_style());
        })
    };
    let on_touch_end = {
        let pan_zoom = pan_zoom.clone();
        Callback::from(move |_: TouchEvent| {
            pan_zoom.borrow_mut().touch_end();
        })
    };

    let on_reset_progress = {
        let session = session.clone();
        let topic = props.topic.clone();
        let bump = bump.clone();
        Callback::from(move |_: ()| {
            if let Some(active) = session.borrow_mut().as_mut() {
                let empty = vec![None; active.puzzle().size * active.puzzle().size];
                active.restore_grid(empty);
                active.cancel();
            }
            persisted_store::clear_progress(topic.as_str());
            bump();
        })
    };

    let on_open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| settings_open.set(true))
    };
    let on_close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| settings_open.set(false))
    };
    let on_back = Callback::from(move |_: MouseEvent| {
        app_router::navigate(&Route::Menu);
    });

    if puzzle_for_topic(props.topic.as_str()).is_none() {
        return html! { <NotFoundPage /> };
    }

    let guard = session.borrow();
    let Some(active) = guard.as_ref() else {
        return html! { <main class="page page-game">{ "불러오는 중..." }</main> };
    };

    let puzzle = active.puzzle();
    let selected: Vec<Coord> = active
        .selection()
        .map(|selection| selection.path.clone())
        .unwrap_or_default();
    let topic_title = topic_by_id(props.topic.as_str())
        .map(|entry| entry.title)
        .unwrap_or("");

    let cell_px = format!("{}px", *cell_size);
    let grid_rows: Html = (0..puzzle.size)
        .map(|row| {
            let cells: Html = (0..puzzle.size)
                .map(|col| {
                    let coord = Coord { x: col, y: row };
                    let blocked = puzzle.is_blocked(coord);
                    let number = puzzle.number_at(coord).map(String::from);
                    let value = active
                        .grid()
                        .cell(row, col)
                        .map(String::from)
                        .unwrap_or_default();
                    let is_selected = selected.contains(&coord);
                    let is_focused = *focused == Some((row, col));
                    let style = format!("width: {cell_px}; height: {cell_px};");

                    if blocked {
                        html! {
                            <div class="cell-wrap">
                                <div class="cell cell-blocked" style={style} />
                            </div>
                        }
                    } else {
                        let onclick = {
                            let on_cell_click = on_cell_click.clone();
                            Callback::from(move |_: MouseEvent| on_cell_click.emit((row, col)))
                        };
                        let oninput = {
                            let on_cell_input = on_cell_input.clone();
                            Callback::from(move |event: InputEvent| {
                                on_cell_input.emit((row, col, event))
                            })
                        };
                        let oncompositionend = {
                            let on_cell_comp_end = on_cell_comp_end.clone();
                            Callback::from(move |event: CompositionEvent| {
                                on_cell_comp_end.emit((row, col, event))
                            })
                        };
                        let class = classes!(
                            "cell",
                            is_selected.then_some("cell-selected"),
                            is_focused.then_some("cell-focused"),
                        );
                        html! {
                            <div class="cell-wrap">
                                if let Some(number) = number {
                                    <span class="cell-number">{ number }</span>
                                }
                                <input
                                    type="text"
                                    inputmode="text"
                                    maxlength="1"
                                    lang="ko"
                                    autocomplete="off"
                                    spellcheck="false"
                                    {class}
                                    style={style}
                                    value={value}
                                    {onclick}
                                    {oninput}
                                    {oncompositionend}
                                />
                            </div>
                        }
                    }
                })
                .collect();
            html! { <div class="grid-row">{ cells }</div> }
        })
        .collect();

    let clue_list: Html = clue_items(puzzle)
        .into_iter()
        .map(|item| {
            let label = format!(
                "{}. ({})",
                item.selector.number,
                item.selector.direction.label()
            );
            let hint = props
                .settings
                .show_hints
                .then(|| format!(" ({}글자)", item.length));
            let onclick = {
                let on_clue_select = on_clue_select.clone();
                let selector = item.selector.clone();
                Callback::from(move |_: MouseEvent| on_clue_select.emit(selector.clone()))
            };
            html! {
                <li class="clue-item" {onclick}>
                    <span class="clue-label">{ label }</span>
                    <span class="clue-text">
                        { item.text }
                        if let Some(hint) = hint {
                            <span class="clue-hint">{ hint }</span>
                        }
                    </span>
                </li>
            }
        })
        .collect();

    let modal = (*answer_open)
        .then(|| active.selection().zip(active.buffer()))
        .flatten()
        .map(|(selection, buffer)| {
            let title = format!(
                "{}번 ({})",
                selection.selector.number,
                selection.selector.direction.label()
            );
            let clue_text = puzzle
                .clue_text(&selection.selector)
                .unwrap_or("")
                .to_string();
            html! {
                <AnswerModal
                    title={title}
                    clue_text={clue_text}
                    slots={buffer.slots().to_vec()}
                    cursor={buffer.cursor()}
                    composing={buffer.is_composing()}
                    preview={buffer.preview()}
                    complete={buffer.is_complete()}
                    on_key={on_modal_key.clone()}
                    on_input={on_modal_input.clone()}
                    on_comp_start={on_comp_start.clone()}
                    on_comp_update={on_comp_update.clone()}
                    on_comp_end={on_comp_end.clone()}
                    on_confirm={on_confirm.clone()}
                    on_cancel={on_cancel.clone()}
                />
            }
        });

    html! {
        <div class="page page-game" data-revision={revision.to_string()}>
            <header class="game-header">
                <button type="button" class="game-back" onclick={on_back} aria-label="뒤로가기">
                    { "←" }
                </button>
                <h1>{ format!("크로스워드 퍼즐 — {topic_title}") }</h1>
                <button
                    type="button"
                    class="game-settings"
                    onclick={on_open_settings}
                    aria-label="설정"
                >
                    { "⚙" }
                </button>
            </header>
            <div
                class="grid-area"
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <div class="grid" style={(*transform).clone()}>
                    { grid_rows }
                </div>
            </div>
            <div class="clue-area">
                <ul class="clue-list">{ clue_list }</ul>
            </div>
            if *settings_open {
                <SettingsModal
                    dark_mode={props.settings.dark_mode}
                    show_hints={props.settings.show_hints}
                    on_toggle_dark={props.on_toggle_dark.clone()}
                    on_toggle_hints={props.on_toggle_hints.clone()}
                    on_reset={on_reset_progress}
                    on_close={on_close_settings}
                />
            }
            if let Some(modal) = modal {
                { modal }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AnswerModalProps {
    pub title: String,
    pub clue_text: String,
    pub slots: Vec<Option<char>>,
    pub cursor: usize,
    pub composing: bool,
    pub preview: Option<char>,
    pub complete: bool,
    pub on_key: Callback<KeyboardEvent>,
    pub on_input: Callback<InputEvent>,
    pub on_comp_start: Callback<CompositionEvent>,
    pub on_comp_update: Callback<CompositionEvent>,
    pub on_comp_end: Callback<CompositionEvent>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(AnswerModal)]
fn answer_modal(props: &AnswerModalProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let on_overlay_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_modal_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_cancel.emit(());
        })
    };
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_confirm.emit(());
        })
    };

    let slots: Html = props
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let at_cursor = index == props.cursor;
            let shown = if at_cursor && props.composing {
                props.preview.or(*slot)
            } else {
                *slot
            };
            let class = classes!(
                "answer-slot",
                at_cursor.then_some("answer-slot-cursor"),
                (at_cursor && props.composing).then_some("answer-slot-composing"),
                slot.is_some().then_some("answer-slot-filled"),
            );
            html! {
                <div {class}>
                    { shown.map(String::from).unwrap_or_default() }
                </div>
            }
        })
        .collect();

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal answer-modal" onclick={on_modal_click}>
                <h3>{ &props.title }</h3>
                <p class="answer-clue">{ &props.clue_text }</p>
                <div class="answer-slots">
                    { slots }
                    <input
                        ref={input_ref}
                        class="answer-input"
                        type="text"
                        lang="ko"
                        autocomplete="off"
                        spellcheck="false"
                        onkeydown={props.on_key.clone()}
                        oninput={props.on_input.clone()}
                        oncompositionstart={props.on_comp_start.clone()}
                        oncompositionupdate={props.on_comp_update.clone()}
                        oncompositionend={props.on_comp_end.clone()}
                    />
                </div>
                <div class="modal-actions">
                    <button type="button" onclick={on_cancel_click}>{ "취소" }</button>
                    <button
                        type="button"
                        class="modal-confirm"
                        disabled={!props.complete}
                        onclick={on_confirm_click}
                    >
                        { "확인" }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsModalProps {
    pub dark_mode: bool,
    pub show_hints: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_toggle_hints: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(SettingsModal)]
fn settings_modal(props: &SettingsModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_modal_click = Callback::from(move |event: MouseEvent| {
        event.stop_propagation();
    });
    let on_dark = {
        let on_toggle_dark = props.on_toggle_dark.clone();
        Callback::from(move |_: Event| on_toggle_dark.emit(()))
    };
    let on_hints = {
        let on_toggle_hints = props.on_toggle_hints.clone();
        Callback::from(move |_: Event| on_toggle_hints.emit(()))
    };
    let on_reset_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal settings-modal" onclick={on_modal_click}>
                <h3>{ "설정" }</h3>
                <label class="settings-row">
                    <span>{ "다크 모드" }</span>
                    <input type="checkbox" checked={props.dark_mode} onchange={on_dark} />
                </label>
                <label class="settings-row">
                    <span>{ "글자 수 힌트 보기" }</span>
                    <input type="checkbox" checked={props.show_hints} onchange={on_hints} />
                </label>
                <button type="button" class="settings-reset" onclick={on_reset_click}>
                    { "진행 상황 초기화" }
                </button>
                <div class="modal-actions">
                    <button type="button" onclick={on_close_click}>{ "닫기" }</button>
                </div>
            </div>
        </div>
    }
}
