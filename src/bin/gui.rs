use taskpal::config::Config;
use taskpal::session::Session;
use taskpal::ui as replies;

use iced::widget::{column, container, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

pub fn main() -> iced::Result {
    iced::application("Taskpal", ChatGui::update, ChatGui::view)
        .theme(ChatGui::theme)
        .run_with(ChatGui::new)
}

struct ChatLine {
    from_user: bool,
    text: String,
}

struct ChatGui {
    session: Session,
    transcript: Vec<ChatLine>,
    input_value: String,
}

#[derive(Debug, Clone)]
enum Message {
    InputChanged(String),
    Submit,
}

impl ChatGui {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_default();
        let (session, notices) = Session::open(&config.data_path());

        let mut transcript = vec![ChatLine {
            from_user: false,
            text: replies::welcome(),
        }];
        transcript.extend(notices.into_iter().map(|text| ChatLine {
            from_user: false,
            text,
        }));

        (
            Self {
                session,
                transcript,
                input_value: String::new(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input_value = value;
                Task::none()
            }
            Message::Submit => {
                if self.input_value.is_empty() {
                    return Task::none();
                }
                let line = std::mem::take(&mut self.input_value);
                self.transcript.push(ChatLine {
                    from_user: true,
                    text: line.clone(),
                });

                let reply = self.session.handle(&line);
                let exit = reply.exit;
                self.transcript.push(ChatLine {
                    from_user: false,
                    text: reply.message,
                });

                if exit { iced::exit() } else { Task::none() }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let transcript: Element<_> = column(
            self.transcript
                .iter()
                .map(|line| {
                    let color = if line.from_user {
                        iced::Color::from_rgb(0.9, 0.8, 0.3)
                    } else {
                        iced::Color::WHITE
                    };
                    text(&line.text).size(18).color(color).into()
                })
                .collect::<Vec<_>>(),
        )
        .spacing(10)
        .into();

        let input = text_input("Type a command (e.g. todo read book)...", &self.input_value)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(10)
            .size(18);

        let content = column![
            scrollable(transcript).height(Length::Fill),
            input
        ]
        .spacing(20)
        .max_width(800);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(20)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
