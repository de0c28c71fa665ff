//! Main application component with routing.

use core_types::SITE_NAME;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Header};
use crate::pages::{DashboardPage, ForgotPasswordPage, HomePage, LoginPage, SignUpPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <SiteLayout>
                <HomePage />
            </SiteLayout>
        },
        Route::Login => html! {
            <AuthLayout>
                <LoginPage />
            </AuthLayout>
        },
        Route::SignUp => html! {
            <AuthLayout>
                <SignUpPage />
            </AuthLayout>
        },
        Route::ForgotPassword => html! {
            <AuthLayout>
                <ForgotPasswordPage />
            </AuthLayout>
        },
        Route::Dashboard => html! {
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <DashboardPage />
                </main>
            </div>
        },
        Route::NotFound => html! {
            <SiteLayout>
                <div class="card not-found">
                    <h1>{"404 - Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </SiteLayout>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Html,
}

/// Header, page content, footer.
#[function_component(SiteLayout)]
fn site_layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main class="site-main">
                { props.children.clone() }
            </main>
            <Footer />
        </>
    }
}

/// Centered card with the brand above it.
#[function_component(AuthLayout)]
fn auth_layout(props: &LayoutProps) -> Html {
    html! {
        <div class="auth-container">
            <Link<Route> to={Route::Home} classes="auth-brand">
                { SITE_NAME }
            </Link<Route>>
            <div class="auth-card">
                { props.children.clone() }
            </div>
        </div>
    }
}

/// Dashboard sidebar navigation.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Home} classes="nav-brand">
                { SITE_NAME }
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard}>
                            {"Overview"}
                        </Link<Route>>
                    </li>
                    <li>
                        <a href="/#programs">{"Programs"}</a>
                    </li>
                    <li>
                        <a href="/#team">{"Team"}</a>
                    </li>
                    <li>
                        <Link<Route> to={Route::Login}>
                            {"Sign out"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
