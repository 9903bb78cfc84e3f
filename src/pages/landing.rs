use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use yew::prelude::*;

use crate::clipboard;
use crate::components::{
    contact::Contact,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    sections::{Features, HowItWorks, StatsBar, TechStack},
};
use crate::config::{self, ROTATION_INTERVAL_MS};
use crate::controller::{Command, Controller, Msg};
use crate::relay;
use crate::scroll_listener::ScrollListener;

pub enum LandingMsg {
    Controller(Msg),
    CopyEmail,
}

impl From<Msg> for LandingMsg {
    fn from(msg: Msg) -> Self {
        LandingMsg::Controller(msg)
    }
}

/// Binds the controller to the browser. The scroll listener and rotation
/// interval live exactly as long as this component.
pub struct LandingPage {
    controller: Controller,
    scroll_listener: Option<ScrollListener>,
    rotation: Option<Interval>,
}

impl Component for LandingPage {
    type Message = LandingMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let scroll_listener =
            ScrollListener::attach(ctx.link().callback(Msg::Scrolled));

        let rotation = {
            let link = ctx.link().clone();
            Interval::new(ROTATION_INTERVAL_MS, move || {
                link.send_message(Msg::RotationTick);
            })
        };

        info!("Landing page mounted");
        Self {
            controller: Controller::new(),
            scroll_listener,
            rotation: Some(rotation),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LandingMsg::Controller(msg) => {
                if let Some(command) = self.controller.update(msg) {
                    self.run(ctx, command);
                }
                true
            }
            LandingMsg::CopyEmail => {
                clipboard::copy_contact_email();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_toggle_menu = link.callback(|_: ()| Msg::ToggleMenu);
        let on_input = link.callback(|(name, value): (String, String)| Msg::FieldChanged(name, value));
        let on_submit = link.callback(|_: ()| Msg::Submit);
        let on_copy_email = link.callback(|_: ()| LandingMsg::CopyEmail);

        html! {
            <div class="app">
                <Nav
                    opacity={self.controller.nav_opacity()}
                    menu_open={self.controller.menu_open()}
                    {on_toggle_menu}
                />
                <Hero active_metric={self.controller.active_metric()} />
                <StatsBar />
                <Features />
                <HowItWorks />
                <TechStack />
                <Contact
                    form={self.controller.form().clone()}
                    status={self.controller.status()}
                    {on_input}
                    {on_submit}
                    {on_copy_email}
                />
                <Footer />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        debug!("Landing page unmounting, releasing listeners");
        drop(self.rotation.take());
        drop(self.scroll_listener.take());
    }
}

impl LandingPage {
    fn run(&self, ctx: &Context<Self>, command: Command) {
        match command {
            Command::SendDemoRequest { ticket, payload } => {
                ctx.link().send_future(async move {
                    let result = relay::send_demo_request(&config::get_form_relay_url(), &payload).await;
                    Msg::Settled(ticket, result)
                });
            }
            Command::ScheduleRevert { ticket, delay_ms } => {
                let link = ctx.link().clone();
                // Not cancelled on unmount; a late message to a destroyed scope is dropped.
                Timeout::new(delay_ms, move || {
                    link.send_message(Msg::RevertStatus(ticket));
                })
                .forget();
            }
        }
    }
}
