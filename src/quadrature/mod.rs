//!
//! # Adaptive Gauss-Kronrod quadrature
//!
//! An integrator in the QUADPACK `dqagse` family: a globally adaptive bisection scheme
//! built on the 21-point Gauss-Kronrod rule, with epsilon-algorithm extrapolation to
//! handle integrands whose bad behavior is concentrated at points of the range. The
//! integrand is any `Fn(f64) -> f64`.
//!
//! The status codes follow the original routine:
//!
//!  * 0: the requested accuracy was achieved
//!  * 1: more subdivisions than allowed were needed
//!  * 2: roundoff error prevented the requested tolerance from being reached
//!  * 3: extremely bad integrand behavior at a point of the range
//!  * 4: roundoff error was detected in the extrapolation table
//!  * 5: the integral is probably divergent or converges too slowly
//!  * 6: the requested tolerances are too small to be meaningful
//!
//! For every non-zero status the returned value is still the best estimate available.
//!

/// Abscissae of the 21-point Kronrod rule. The odd entries are the abscissae of the
/// embedded 10-point Gauss rule
const XGK: [f64; 11] = [
    0.995657163025808080735527280689003,
    0.973906528517171720077964012084452,
    0.930157491355708226001207180059508,
    0.865063366688984510732096688423493,
    0.780817726586416897063717578345042,
    0.679409568299024406234327365114874,
    0.562757134668604683339000099272694,
    0.433395394129247190799265943165784,
    0.294392862701460198131126603103866,
    0.148874338981631210884826001129720,
    0.000000000000000000000000000000000
];

/// Weights of the 21-point Kronrod rule
const WGK: [f64; 11] = [
    0.011694638867371874278064396062192,
    0.032558162307964727478818972459390,
    0.054755896574351996031381300244580,
    0.075039674810919952767043140916190,
    0.093125454583697605535065465083366,
    0.109387158802297641899210590325805,
    0.123491976262065851077958109831074,
    0.134709217311473325928054001771707,
    0.142775938577060080797094273138717,
    0.147739104901338491374841515972068,
    0.149445554002916905664936468389821
];

/// Weights of the embedded 10-point Gauss rule
const WG: [f64; 5] = [
    0.066671344308688137593568809893332,
    0.149451349150580593145776339657697,
    0.219086362515982043995534934228163,
    0.269266719309996355091226921569469,
    0.295524224714752870173892994651338
];

///
/// The outcome of an adaptive integration
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadrature {
    /// Best estimate of the integral
    pub result: f64,

    /// Estimate of the absolute error in the result
    pub abserr: f64,

    /// Number of integrand evaluations performed
    pub neval: usize,

    /// Status code (0 for a successful integration)
    pub status: i32
}

///
/// Integrates a function over `[a, b]`, adaptively bisecting until the estimated error
/// drops below `max(epsabs, epsrel * |integral|)` or `limit` subintervals are in use
///
/// When bisection stalls because the error is concentrated in ever-smaller subintervals,
/// the sequence of estimates is fed through the epsilon algorithm to accelerate its
/// convergence, which resolves integrable singularities at points of the range.
///
pub fn qagse<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, epsabs: f64, epsrel: f64, limit: usize) -> Quadrature {
    let epmach = f64::EPSILON;
    let uflow  = f64::MIN_POSITIVE;
    let oflow  = f64::MAX;

    let mut ier: i32 = 0;

    if limit < 1 || (epsabs <= 0.0 && epsrel < f64::max(50.0*epmach, 0.5e-28)) {
        return Quadrature { result: 0.0, abserr: 0.0, neval: 0, status: 6 };
    }

    // First approximation over the whole range
    let (result0, abserr0, defabs, resasc0) = qk21(f, a, b);

    let dres        = result0.abs();
    let mut errbnd  = f64::max(epsabs, epsrel*dres);

    if abserr0 <= 100.0*epmach*defabs && abserr0 > errbnd {
        ier = 2;
    }
    if limit == 1 {
        ier = 1;
    }
    if ier != 0 || (abserr0 <= errbnd && abserr0 != resasc0) || abserr0 == 0.0 {
        return Quadrature { result: result0, abserr: abserr0, neval: 21, status: ier };
    }

    // Per-interval bookkeeping: range, integral and error estimate, plus iord which keeps
    // the interval indices sorted by decreasing error estimate
    let mut alist   = vec![0.0; limit];
    let mut blist   = vec![0.0; limit];
    let mut rlist   = vec![0.0; limit];
    let mut elist   = vec![0.0; limit];
    let mut iord    = vec![0usize; limit];

    alist[0] = a;
    blist[0] = b;
    rlist[0] = result0;
    elist[0] = abserr0;

    // Extrapolation table and its state
    let mut rlist2  = [0.0f64; 52];
    let mut res3la  = [0.0f64; 3];
    rlist2[0]       = result0;

    let mut result  = result0;
    let mut abserr  = oflow;
    let mut errmax  = abserr0;
    let mut maxerr  = 0;
    let mut area    = result0;
    let mut errsum  = abserr0;
    let mut nrmax   = 0;
    let mut nres    = 0;
    let mut numrl2  = 2;
    let mut ktmin   = 0;
    let mut extrap  = false;
    let mut noext   = false;
    let mut ierro   = 0;
    let mut iroff1  = 0;
    let mut iroff2  = 0;
    let mut iroff3  = 0;
    let mut correc  = 0.0;
    let mut small   = 0.0;
    let mut erlarg  = 0.0;
    let mut ertest  = errbnd;
    let mut last    = 1;

    let ksgn = if dres >= (1.0 - 50.0*epmach)*defabs { 1 } else { -1 };

    // When set, the final result is the plain sum over the interval list rather than the
    // extrapolated value
    let mut global_sum = false;

    'bisect: for this_interval in 2..=limit {
        last = this_interval;

        // Bisect the interval with the largest error estimate still under consideration
        let a1 = alist[maxerr];
        let b1 = 0.5*(alist[maxerr] + blist[maxerr]);
        let a2 = b1;
        let b2 = blist[maxerr];

        let erlast = errmax;

        let (area1, error1, _, defab1) = qk21(f, a1, b1);
        let (area2, error2, _, defab2) = qk21(f, a2, b2);

        let area12 = area1 + area2;
        let erro12 = error1 + error2;
        errsum += erro12 - errmax;
        area   += area12 - rlist[maxerr];

        // Count the ways roundoff can show up: bisection leaving the estimate unchanged
        // while the error stays, or the error growing outright
        if defab1 != error1 && defab2 != error2 {
            if (rlist[maxerr] - area12).abs() <= 1.0e-5*area12.abs() && erro12 >= 0.99*errmax {
                if extrap { iroff2 += 1; } else { iroff1 += 1; }
            }
            if last > 10 && erro12 > errmax {
                iroff3 += 1;
            }
        }

        rlist[maxerr]   = area1;
        rlist[last-1]   = area2;
        errbnd          = f64::max(epsabs, epsrel*area.abs());

        if iroff1 + iroff2 >= 10 || iroff3 >= 20 {
            ier = 2;
        }
        if iroff2 >= 5 {
            ierro = 3;
        }
        if last == limit {
            ier = 1;
        }

        // Bad behavior at a point of the range: the bisected interval has shrunk to the
        // scale of the arithmetic
        if f64::max(a1.abs(), b2.abs()) <= (1.0 + 100.0*epmach)*(a2.abs() + 1000.0*uflow) {
            ier = 4;
        }

        // Store the half with the larger error where the bisected interval was, so iord
        // stays close to sorted
        if error2 > error1 {
            alist[maxerr]   = a2;
            alist[last-1]   = a1;
            blist[last-1]   = b1;
            rlist[maxerr]   = area2;
            rlist[last-1]   = area1;
            elist[maxerr]   = error2;
            elist[last-1]   = error1;
        } else {
            alist[last-1]   = a2;
            blist[maxerr]   = b1;
            blist[last-1]   = b2;
            elist[maxerr]   = error1;
            elist[last-1]   = error2;
        }

        qpsrt(limit, last, &mut maxerr, &mut errmax, &elist, &mut iord, &mut nrmax);

        if errsum <= errbnd {
            global_sum = true;
            break 'bisect;
        }
        if ier != 0 {
            break 'bisect;
        }
        if last == 2 {
            small       = (b - a).abs()*0.375;
            erlarg      = errsum;
            ertest      = errbnd;
            rlist2[1]   = area;
            continue 'bisect;
        }
        if noext {
            continue 'bisect;
        }

        erlarg -= erlast;
        if (b1 - a1).abs() > small {
            erlarg += erro12;
        }

        if !extrap {
            // Only start extrapolating once the interval to bisect next is small
            if (blist[maxerr] - alist[maxerr]).abs() > small {
                continue 'bisect;
            }
            extrap  = true;
            nrmax   = 1;
        }

        if ierro != 3 && erlarg > ertest {
            // The larger intervals still carry most of the error: bisect those first,
            // scanning down the sorted list for one that is still large
            let id      = nrmax + 1;
            let jupbnd  = if last > 2 + limit/2 { limit + 3 - last } else { last };

            let mut found_large = false;
            for _ in id..=jupbnd {
                maxerr = iord[nrmax];
                errmax = elist[maxerr];

                if (blist[maxerr] - alist[maxerr]).abs() > small {
                    found_large = true;
                    break;
                }
                nrmax += 1;
            }

            if found_large {
                continue 'bisect;
            }
        }

        // Extrapolate from the sequence of global estimates
        numrl2 += 1;
        rlist2[numrl2-1] = area;

        let (reseps, abseps) = qelg(&mut numrl2, &mut rlist2, &mut res3la, &mut nres);

        ktmin += 1;
        if ktmin > 5 && abserr < 1.0e-3*errsum {
            ier = 5;
        }

        if abseps < abserr {
            ktmin   = 0;
            abserr  = abseps;
            result  = reseps;
            correc  = erlarg;
            ertest  = f64::max(epsabs, epsrel*reseps.abs());

            if abserr <= ertest {
                break 'bisect;
            }
        }

        // Back to bisecting, starting over on the smallest intervals
        if numrl2 == 1 {
            noext = true;
        }
        if ier == 5 {
            break 'bisect;
        }

        maxerr  = iord[0];
        errmax  = elist[maxerr];
        nrmax   = 0;
        extrap  = false;
        small   *= 0.5;
        erlarg  = errsum;
    }

    // Decide between the extrapolated result and the plain global sum
    if !global_sum {
        let mut done = false;

        if abserr == oflow {
            global_sum = true;
        } else if ier + ierro != 0 {
            if ierro == 3 {
                abserr += correc;
            }
            if ier == 0 {
                ier = 3;
            }

            if result == 0.0 || area == 0.0 {
                if abserr > errsum {
                    global_sum = true;
                } else if area == 0.0 {
                    done = true;
                }
            } else if abserr/result.abs() > errsum/area.abs() {
                global_sum = true;
            }
        }

        if !global_sum && !done {
            // Test for divergence
            let ratio = result/area;

            if !(ksgn == -1 && f64::max(result.abs(), area.abs()) <= defabs*0.01) {
                if 0.01 > ratio || ratio > 100.0 || errsum > area.abs() {
                    ier = 6;
                }
            }
        }
    }

    if global_sum {
        result = rlist[..last].iter().sum();
        abserr = errsum;
    }

    if ier > 2 {
        ier -= 1;
    }

    Quadrature { result, abserr, neval: 42*last - 21, status: ier }
}

///
/// Evaluates the 21-point Gauss-Kronrod rule over `[a, b]`
///
/// Returns the integral estimate, the error estimate (the scaled difference between the
/// Kronrod and embedded Gauss results), the integral of `|f|` and the integral of
/// `|f - mean|`, which the adaptive driver uses to recognize roundoff-limited intervals.
///
fn qk21<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> (f64, f64, f64, f64) {
    let epmach = f64::EPSILON;
    let uflow  = f64::MIN_POSITIVE;

    let centr  = 0.5*(a + b);
    let hlgth  = 0.5*(b - a);
    let dhlgth = hlgth.abs();

    let mut fv1 = [0.0; 10];
    let mut fv2 = [0.0; 10];

    let fc          = f(centr);
    let mut resg    = 0.0;
    let mut resk    = WGK[10]*fc;
    let mut resabs  = resk.abs();

    for j in 0..5 {
        let jtw     = 2*j + 1;
        let absc    = hlgth*XGK[jtw];
        let fval1   = f(centr - absc);
        let fval2   = f(centr + absc);
        fv1[jtw]    = fval1;
        fv2[jtw]    = fval2;

        let fsum    = fval1 + fval2;
        resg        += WG[j]*fsum;
        resk        += WGK[jtw]*fsum;
        resabs      += WGK[jtw]*(fval1.abs() + fval2.abs());
    }

    for j in 0..5 {
        let jtwm1   = 2*j;
        let absc    = hlgth*XGK[jtwm1];
        let fval1   = f(centr - absc);
        let fval2   = f(centr + absc);
        fv1[jtwm1]  = fval1;
        fv2[jtwm1]  = fval2;

        let fsum    = fval1 + fval2;
        resk        += WGK[jtwm1]*fsum;
        resabs      += WGK[jtwm1]*(fval1.abs() + fval2.abs());
    }

    let reskh       = resk*0.5;
    let mut resasc  = WGK[10]*(fc - reskh).abs();
    for j in 0..10 {
        resasc += WGK[j]*((fv1[j] - reskh).abs() + (fv2[j] - reskh).abs());
    }

    let result  = resk*hlgth;
    let resabs  = resabs*dhlgth;
    let resasc  = resasc*dhlgth;

    let mut abserr = ((resk - resg)*hlgth).abs();
    if resasc != 0.0 && abserr != 0.0 {
        abserr = resasc*f64::min(1.0, (200.0*abserr/resasc).powf(1.5));
    }
    if resabs > uflow/(50.0*epmach) {
        abserr = f64::max(epmach*50.0*resabs, abserr);
    }

    (result, abserr, resabs, resasc)
}

///
/// Keeps the interval list sorted by decreasing error estimate
///
/// `iord` holds interval indices; entry `nrmax` points at the interval to bisect next.
/// Only the portion of the list that can still be subdivided is kept fully sorted.
///
fn qpsrt(limit: usize, last: usize, maxerr: &mut usize, ermax: &mut f64, elist: &[f64], iord: &mut [usize], nrmax: &mut usize) {
    if last <= 2 {
        iord[0] = 0;
        iord[1] = 1;
    } else {
        let errmax = elist[*maxerr];

        // The error at maxerr may have grown: walk it back up towards the head of the list
        while *nrmax > 0 && errmax > elist[iord[*nrmax - 1]] {
            iord[*nrmax] = iord[*nrmax - 1];
            *nrmax -= 1;
        }

        let jupbn   = if last > limit/2 + 2 { limit + 2 - last } else { last - 1 };
        let jbnd    = jupbn - 1;
        let errmin  = elist[last - 1];

        // Insert the larger half top-down
        let mut insert_at   = None;
        let mut i           = *nrmax + 1;

        while i <= jbnd {
            let isucc = iord[i];
            if errmax >= elist[isucc] {
                insert_at = Some(i);
                break;
            }
            iord[i-1] = isucc;
            i += 1;
        }

        match insert_at {
            None => {
                iord[jbnd]  = *maxerr;
                iord[jupbn] = last - 1;
            },

            Some(i) => {
                iord[i-1] = *maxerr;

                // Insert the smaller half bottom-up
                let mut k       = jbnd;
                let mut placed  = false;

                for _ in i..=jbnd {
                    let isucc = iord[k];
                    if errmin < elist[isucc] {
                        iord[k+1] = last - 1;
                        placed = true;
                        break;
                    }
                    iord[k+1] = isucc;
                    k -= 1;
                }

                if !placed {
                    iord[i] = last - 1;
                }
            }
        }
    }

    *maxerr = iord[*nrmax];
    *ermax  = elist[*maxerr];
}

///
/// The epsilon algorithm: extrapolates the limit of a slowly convergent sequence
///
/// `epstab` holds the last part of the sequence (`n` entries, newest last) along with the
/// lower diagonals of the triangular epsilon table computed from it; both are updated in
/// place. `res3la` carries the three most recent extrapolated results so an error estimate
/// can be formed from their differences.
///
fn qelg(n: &mut usize, epstab: &mut [f64; 52], res3la: &mut [f64; 3], nres: &mut usize) -> (f64, f64) {
    let epmach = f64::EPSILON;
    let oflow  = f64::MAX;

    *nres += 1;

    let mut result = epstab[*n - 1];
    let mut abserr = oflow;

    if *n < 3 {
        abserr = f64::max(abserr, 5.0*epmach*result.abs());
        return (result, abserr);
    }

    let limexp = 50;
    epstab[*n + 1] = epstab[*n - 1];
    epstab[*n - 1] = oflow;

    let newelm  = (*n - 1)/2;
    let num     = *n;
    let mut k1  = *n;

    for i in 1..=newelm {
        let k2 = k1 - 1;
        let k3 = k1 - 2;

        let mut res = epstab[k1 + 1];
        let e0      = epstab[k3 - 1];
        let e1      = epstab[k2 - 1];
        let e2      = res;

        let e1abs   = e1.abs();
        let delta2  = e2 - e1;
        let err2    = delta2.abs();
        let tol2    = f64::max(e2.abs(), e1abs)*epmach;
        let delta3  = e1 - e0;
        let err3    = delta3.abs();
        let tol3    = f64::max(e1abs, e0.abs())*epmach;

        if err2 <= tol2 && err3 <= tol3 {
            // The last three elements agree to machine accuracy: converged
            result = res;
            abserr = f64::max(err2 + err3, 5.0*epmach*result.abs());
            return (result, abserr);
        }

        let e3 = epstab[k1 - 1];
        epstab[k1 - 1] = e1;

        let delta1  = e1 - e3;
        let err1    = delta1.abs();
        let tol1    = f64::max(e1abs, e3.abs())*epmach;

        // Two elements very close together, or an irregular table: drop its tail
        if err1 <= tol1 || err2 <= tol2 || err3 <= tol3 {
            *n = i + i - 1;
            break;
        }

        let ss      = 1.0/delta1 + 1.0/delta2 - 1.0/delta3;
        let epsinf  = (ss*e1).abs();

        if epsinf <= 1.0e-4 {
            *n = i + i - 1;
            break;
        }

        res = e1 + 1.0/ss;
        epstab[k1 - 1] = res;
        k1 -= 2;

        let error = err2 + (res - e2).abs() + err3;
        if error <= abserr {
            abserr = error;
            result = res;
        }
    }

    // Shift the table down ready for the next call
    if *n == limexp {
        *n = 2*(limexp/2) - 1;
    }

    let mut ib = if num % 2 == 0 { 2 } else { 1 };
    for _ in 0..(newelm + 1) {
        epstab[ib - 1] = epstab[ib + 1];
        ib += 2;
    }

    if num != *n {
        let mut index = num - *n;
        for i in 0..*n {
            epstab[i] = epstab[index];
            index += 1;
        }
    }

    if *nres < 4 {
        res3la[*nres - 1] = result;
        abserr = oflow;
    } else {
        abserr = (result - res3la[2]).abs() + (result - res3la[1]).abs() + (result - res3la[0]).abs();
        res3la[0] = res3la[1];
        res3la[1] = res3la[2];
        res3la[2] = result;
    }

    abserr = f64::max(abserr, 5.0*epmach*result.abs());

    (result, abserr)
}
